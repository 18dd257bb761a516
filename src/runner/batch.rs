//! Batch execution - one pass over all configured accounts.
//!
//! The config is read fresh at the start of every batch so credential
//! edits take effect between loop iterations. Only config conditions are
//! fatal; a failing account just lowers the success count.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{error, info};

use crate::config::Config;
use crate::domain::BatchResult;
use crate::error::{Result, SignrError};
use crate::runner::AccountProcessor;
use crate::session::SessionProvider;

/// Separator between accounts in the log, for operator readability.
const SEPARATOR: &str = "--------------------------------------------------";

/// Seam between the schedule loop and batch execution.
#[async_trait]
pub trait BatchExecutor: Send + Sync {
    async fn run_batch(&self) -> Result<BatchResult>;
}

/// Runs one batch: load config, process every account, report counts.
pub struct BatchRunner<P: SessionProvider> {
    config_path: PathBuf,
    processor: AccountProcessor<P>,
}

impl<P: SessionProvider> BatchRunner<P> {
    pub fn new(config_path: impl Into<PathBuf>, provider: P) -> Self {
        Self {
            config_path: config_path.into(),
            processor: AccountProcessor::new(provider),
        }
    }

    /// First-run bootstrap: write a sample config and bail out fatally.
    ///
    /// Retrying with unedited placeholder credentials is pointless, so
    /// this is not a retryable condition.
    fn bootstrap_config(&self) -> SignrError {
        error!(
            "config file {} does not exist, writing a sample",
            self.config_path.display()
        );
        if let Err(err) = Config::write_sample(&self.config_path) {
            error!("could not write sample config: {}", err);
        } else {
            info!(
                "sample config written to {}; edit the usernames and passwords, then run again",
                self.config_path.display()
            );
        }
        SignrError::ConfigMissing(self.config_path.clone())
    }
}

#[async_trait]
impl<P: SessionProvider> BatchExecutor for BatchRunner<P> {
    async fn run_batch(&self) -> Result<BatchResult> {
        if !self.config_path.exists() {
            return Err(self.bootstrap_config());
        }

        let config = Config::load(&self.config_path)?;
        let total = config.users.len();
        let mut succeeded = 0;

        info!("processing {} accounts", total);
        info!("{}", SEPARATOR);
        for credential in &config.users {
            if self.processor.process(credential).await {
                succeeded += 1;
            }
            info!("{}", SEPARATOR);
        }

        info!("batch complete: {}/{} accounts succeeded", succeeded, total);
        Ok(BatchResult { total, succeeded })
    }
}
