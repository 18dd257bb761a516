//! Account session trait and error taxonomy.
//!
//! An [`AccountSession`] performs authentication and the daily check-in
//! for exactly one account. Sessions are created fresh per account by a
//! [`SessionProvider`] and discarded after use; there is no pooling or
//! reuse across accounts or batches.

pub mod client;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SignAttempt, SignInfo};

pub use client::{ForumProvider, ForumSession, SessionConfig};

/// Errors that can occur while driving one account's session.
///
/// `Authentication` and `SignIn` are the two typed classes the processor
/// branches on; everything else is unclassified and treated the same way
/// (account failed, batch continues).
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credentials rejected or session could not be established
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The check-in action itself failed
    #[error("check-in failed: {0}")]
    SignIn(String),

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with something we could not interpret
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// One account's authenticated session with the service.
#[async_trait]
pub trait AccountSession: Send {
    /// Authenticate. Must be called before any other method.
    async fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError>;

    /// Perform the daily check-in.
    async fn sign_in(&mut self) -> Result<SignAttempt, SessionError>;

    /// Read-only status query.
    async fn sign_info(&self) -> Result<SignInfo, SessionError>;
}

/// Creates a fresh session per account.
pub trait SessionProvider: Send + Sync {
    type Session: AccountSession;

    /// Open a new private session. Construction failures are per-account
    /// failures, not batch failures.
    fn session(&self) -> Result<Self::Session, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error_display() {
        let err = SessionError::Authentication("invalid_grant".to_string());
        assert_eq!(err.to_string(), "authentication failed: invalid_grant");
    }

    #[test]
    fn test_sign_in_error_display() {
        let err = SessionError::SignIn("service unavailable".to_string());
        assert_eq!(err.to_string(), "check-in failed: service unavailable");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = SessionError::InvalidResponse("not json".to_string());
        assert_eq!(err.to_string(), "invalid response: not json");
    }
}
