//! Per-account processing - the fault-isolation boundary.
//!
//! AccountProcessor drives one account through login, check-in, and the
//! status summary, converting every failure mode into a boolean plus log
//! lines. Nothing escapes `process`: one bad account must never take down
//! the rest of the batch.

use log::{error, info, warn};

use crate::domain::{Credential, SignAttempt};
use crate::session::{AccountSession, SessionError, SessionProvider};
use crate::timefmt::format_sign_time;

/// Processes one account at a time with a private, throwaway session.
pub struct AccountProcessor<P: SessionProvider> {
    provider: P,
}

impl<P: SessionProvider> AccountProcessor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Process one account; `true` means the account succeeded.
    ///
    /// A benign "already checked in today" counts as success. All errors
    /// are logged here and reduced to `false`.
    pub async fn process(&self, credential: &Credential) -> bool {
        match self.run_account(credential).await {
            Ok(()) => true,
            Err(SessionError::Authentication(reason)) => {
                error!("account {}: login failed: {}", credential.username, reason);
                false
            }
            Err(SessionError::SignIn(reason)) => {
                error!("account {}: check-in failed: {}", credential.username, reason);
                false
            }
            Err(err) => {
                error!("account {}: processing error: {}", credential.username, err);
                false
            }
        }
    }

    async fn run_account(&self, credential: &Credential) -> Result<(), SessionError> {
        let mut session = self.provider.session()?;

        session
            .login(&credential.username, &credential.password)
            .await?;
        info!("account {}: logged in", credential.username);

        match session.sign_in().await? {
            SignAttempt::Fresh => {
                info!("account {}: checked in", credential.username);
            }
            SignAttempt::AlreadyDone => {
                warn!("account {}: already checked in today", credential.username);
            }
        }

        let summary = session.sign_info().await?;
        info!(
            " - last check-in: {}",
            format_sign_time(summary.last_sign_in_time.as_deref())
        );
        if summary.has_signed_in_today {
            if let Some(reward) = summary.last_reward {
                info!(" - reward gained: {}", reward);
            }
            if let Some(streak) = summary.last_sign_in_count {
                info!(" - consecutive days: {}", streak);
            }
        }

        Ok(())
    }
}
