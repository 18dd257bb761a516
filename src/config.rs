//! Account configuration.
//!
//! A JSON file holding the list of accounts to process. The file is read
//! fresh at the start of every batch so an operator can edit credentials
//! between loop iterations without restarting the process.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Credential;
use crate::error::{Result, SignrError};

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub users: Vec<Credential>,
}

impl Config {
    /// Load and validate the config file.
    ///
    /// The file must exist; callers that want first-run bootstrap check
    /// existence themselves and call [`Config::write_sample`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.users.is_empty() {
            return Err(SignrError::NoAccounts);
        }
        log::info!("loaded {} accounts from {}", config.users.len(), path.display());
        Ok(config)
    }

    /// Write a pretty-printed sample config for the operator to edit.
    pub fn write_sample(path: &Path) -> Result<()> {
        let sample = Self {
            users: vec![
                Credential::new("your_username1", "your_password1"),
                Credential::new("your_username2", "your_password2"),
            ],
        };
        let content = serde_json::to_string_pretty(&sample)?;
        fs::write(path, content)?;
        Ok(())
    }
}
