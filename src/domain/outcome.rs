//! Outcome types for check-in execution.
//!
//! This module defines the result types flowing back up the stack: the
//! per-account check-in result, the status summary reported by the
//! service, the per-batch aggregate, and the terminal outcome of the
//! schedule loop.

use serde::Deserialize;

/// Result of one check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignAttempt {
    /// The check-in was performed just now
    Fresh,
    /// The account had already checked in today; benign, still a success
    AlreadyDone,
}

/// Status summary returned by the service's read-only query.
///
/// Field names follow the service's JSON. Produced fresh per account per
/// run; never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInfo {
    pub has_signed_in_today: bool,
    pub last_sign_in_time: Option<String>,
    /// Reward amount granted by the last check-in
    pub last_reward: Option<i64>,
    /// Consecutive-day count
    pub last_sign_in_count: Option<u32>,
}

/// Aggregate result of one pass over all configured accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
}

/// Terminal outcome of the schedule loop.
///
/// Transient failures are loop-internal (they retry) and never appear
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Single-shot batch finished normally
    Completed,
    /// A config condition stopped the loop; operator action required
    FatalConfig,
    /// Operator interrupt; deliberate stop, not a failure
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_attempt_variants() {
        assert_eq!(SignAttempt::Fresh, SignAttempt::Fresh);
        assert_ne!(SignAttempt::Fresh, SignAttempt::AlreadyDone);
    }

    #[test]
    fn test_sign_info_deserialization() {
        let info: SignInfo = serde_json::from_str(
            r#"{
                "hasSignedInToday": true,
                "lastSignInTime": "2026-08-05T08:30:00.0000000+08:00",
                "lastReward": 15,
                "lastSignInCount": 7
            }"#,
        )
        .unwrap();
        assert!(info.has_signed_in_today);
        assert_eq!(
            info.last_sign_in_time.as_deref(),
            Some("2026-08-05T08:30:00.0000000+08:00")
        );
        assert_eq!(info.last_reward, Some(15));
        assert_eq!(info.last_sign_in_count, Some(7));
    }

    #[test]
    fn test_sign_info_missing_fields_default() {
        let info: SignInfo = serde_json::from_str(r#"{"hasSignedInToday": false}"#).unwrap();
        assert!(!info.has_signed_in_today);
        assert!(info.last_sign_in_time.is_none());
        assert!(info.last_reward.is_none());
        assert!(info.last_sign_in_count.is_none());
    }

    #[test]
    fn test_batch_result_counts() {
        let result = BatchResult {
            total: 3,
            succeeded: 2,
        };
        assert!(result.succeeded <= result.total);
    }

    #[test]
    fn test_run_outcome_variants() {
        assert_eq!(RunOutcome::Completed, RunOutcome::Completed);
        assert_ne!(RunOutcome::Completed, RunOutcome::Interrupted);
        assert_ne!(RunOutcome::FatalConfig, RunOutcome::Interrupted);
    }
}
