//! Account credential type
//!
//! Credentials are loaded from the config file and are immutable for the
//! duration of a run. Identity is the username.

use serde::{Deserialize, Serialize};

/// One configured account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
