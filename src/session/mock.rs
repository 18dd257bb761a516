//! Scripted mock session for tests.
//!
//! Mirrors the shape of the real client: a provider opening one throwaway
//! session per account, with per-username scripted outcomes and shared
//! call counters so tests can assert ordering guarantees (e.g. no
//! check-in after a failed login).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{SignAttempt, SignInfo};
use crate::session::{AccountSession, SessionError, SessionProvider};

/// What a mock session should do for one account.
#[derive(Debug, Clone)]
pub struct ScriptedOutcome {
    login_failure: Option<String>,
    sign_in_failure: Option<String>,
    attempt: SignAttempt,
    info_failure: Option<String>,
    info: SignInfo,
}

impl ScriptedOutcome {
    /// Login ok, fresh check-in, plausible summary.
    pub fn fresh() -> Self {
        Self {
            login_failure: None,
            sign_in_failure: None,
            attempt: SignAttempt::Fresh,
            info_failure: None,
            info: SignInfo {
                has_signed_in_today: true,
                last_sign_in_time: Some("2026-08-05T08:30:00.0000000+08:00".to_string()),
                last_reward: Some(10),
                last_sign_in_count: Some(3),
            },
        }
    }

    /// Login ok, check-in reports "already done today".
    pub fn already_done() -> Self {
        Self {
            attempt: SignAttempt::AlreadyDone,
            ..Self::fresh()
        }
    }

    /// Login rejected; check-in must never be attempted.
    pub fn auth_failure(reason: &str) -> Self {
        Self {
            login_failure: Some(reason.to_string()),
            ..Self::fresh()
        }
    }

    /// Login ok, the check-in action itself fails.
    pub fn sign_in_failure(reason: &str) -> Self {
        Self {
            sign_in_failure: Some(reason.to_string()),
            ..Self::fresh()
        }
    }

    /// Login and check-in ok, the status query fails (unclassified).
    pub fn info_failure(reason: &str) -> Self {
        Self {
            info_failure: Some(reason.to_string()),
            ..Self::fresh()
        }
    }

    /// Replace the scripted status summary.
    pub fn with_info(mut self, info: SignInfo) -> Self {
        self.info = info;
        self
    }
}

/// Call counters shared across sessions from one provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub sessions_opened: usize,
    pub login_calls: usize,
    pub sign_in_calls: usize,
    pub info_calls: usize,
}

/// Provider handing out [`MockSession`]s. Clones share counters.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default: ScriptedOutcome,
    by_user: HashMap<String, ScriptedOutcome>,
    fail_open: bool,
    calls: Arc<Mutex<CallCounts>>,
    /// Usernames in the order sessions logged in
    processed: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Every account gets the same scripted outcome.
    pub fn returning(outcome: ScriptedOutcome) -> Self {
        Self {
            default: outcome,
            by_user: HashMap::new(),
            fail_open: false,
            calls: Arc::new(Mutex::new(CallCounts::default())),
            processed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a different outcome for one username.
    pub fn with_account(mut self, username: &str, outcome: ScriptedOutcome) -> Self {
        self.by_user.insert(username.to_string(), outcome);
        self
    }

    /// Make `session()` itself fail (construction failure).
    pub fn failing_to_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.lock().expect("call counter lock poisoned")
    }

    /// Usernames that reached login, in order.
    pub fn processed_users(&self) -> Vec<String> {
        self.processed
            .lock()
            .expect("processed list lock poisoned")
            .clone()
    }
}

impl SessionProvider for MockProvider {
    type Session = MockSession;

    fn session(&self) -> Result<MockSession, SessionError> {
        if self.fail_open {
            return Err(SessionError::InvalidResponse(
                "could not open session".to_string(),
            ));
        }
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .sessions_opened += 1;
        Ok(MockSession {
            default: self.default.clone(),
            by_user: self.by_user.clone(),
            active: None,
            calls: Arc::clone(&self.calls),
            processed: Arc::clone(&self.processed),
        })
    }
}

/// One scripted account session.
#[derive(Debug)]
pub struct MockSession {
    default: ScriptedOutcome,
    by_user: HashMap<String, ScriptedOutcome>,
    active: Option<ScriptedOutcome>,
    calls: Arc<Mutex<CallCounts>>,
    processed: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl AccountSession for MockSession {
    async fn login(&mut self, username: &str, _password: &str) -> Result<(), SessionError> {
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .login_calls += 1;
        self.processed
            .lock()
            .expect("processed list lock poisoned")
            .push(username.to_string());

        let outcome = self
            .by_user
            .get(username)
            .cloned()
            .unwrap_or_else(|| self.default.clone());
        if let Some(reason) = &outcome.login_failure {
            return Err(SessionError::Authentication(reason.clone()));
        }
        self.active = Some(outcome);
        Ok(())
    }

    async fn sign_in(&mut self) -> Result<SignAttempt, SessionError> {
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .sign_in_calls += 1;
        let outcome = self
            .active
            .as_ref()
            .ok_or_else(|| SessionError::Authentication("not logged in".to_string()))?;
        if let Some(reason) = &outcome.sign_in_failure {
            return Err(SessionError::SignIn(reason.clone()));
        }
        Ok(outcome.attempt)
    }

    async fn sign_info(&self) -> Result<SignInfo, SessionError> {
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .info_calls += 1;
        let outcome = self
            .active
            .as_ref()
            .ok_or_else(|| SessionError::Authentication("not logged in".to_string()))?;
        if let Some(reason) = &outcome.info_failure {
            return Err(SessionError::InvalidResponse(reason.clone()));
        }
        Ok(outcome.info.clone())
    }
}
