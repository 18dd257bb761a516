//! Error types for signr
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Batch-level errors surfaced by the runner.
///
/// The three config conditions are fatal: they stop the schedule loop and
/// require operator action. Everything else is treated as transient and
/// retried on the short interval.
#[derive(Debug, Error)]
pub enum SignrError {
    /// Config file does not exist (a sample has been written)
    #[error("config file not found: {0}")]
    ConfigMissing(PathBuf),

    /// Config file exists but is not valid JSON
    #[error("config file is invalid: {0}")]
    ConfigInvalid(#[from] serde_json::Error),

    /// Config parsed but contains no accounts
    #[error("no accounts configured")]
    NoAccounts,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SignrError {
    /// True for config conditions that retrying cannot fix.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SignrError::ConfigMissing(_) | SignrError::ConfigInvalid(_) | SignrError::NoAccounts
        )
    }
}

/// Result type alias for signr operations
pub type Result<T> = std::result::Result<T, SignrError>;
