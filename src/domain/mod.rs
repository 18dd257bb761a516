//! Domain types for signr
//!
//! This module contains the core domain types:
//! - Credential: one configured account (username + password)
//! - SignAttempt: result of a check-in attempt (Fresh, AlreadyDone)
//! - SignInfo: status summary from the service's read-only query
//! - BatchResult: aggregate success/total for one batch
//! - RunOutcome: terminal outcome of the schedule loop

pub mod account;
pub mod outcome;

pub use account::Credential;
pub use outcome::{BatchResult, RunOutcome, SignAttempt, SignInfo};
