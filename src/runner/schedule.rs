//! Schedule loop - repeatedly runs batches until stopped.
//!
//! Two sleep durations encode two failure classes: the long interval
//! waits for the next legitimate scheduled run after a successful batch,
//! the short interval self-heals from an unexpected hiccup. Config-shaped
//! failures bypass retry entirely since retrying without operator
//! intervention cannot succeed.

use std::time::Duration;

use log::{error, info, warn};

use crate::domain::RunOutcome;
use crate::runner::BatchExecutor;
use crate::shutdown::Shutdown;

/// Configuration for the schedule loop
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Keep running batches instead of exiting after the first
    pub continuous: bool,
    /// Interval between successful batches in continuous mode
    pub run_interval: Duration,
    /// Interval before retrying after an unclassified batch failure
    pub retry_interval: Duration,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            run_interval: Duration::from_secs(3600),
            retry_interval: Duration::from_secs(10),
        }
    }
}

impl ScheduleConfig {
    /// Single-shot or continuous with the default intervals.
    pub fn new(continuous: bool) -> Self {
        Self {
            continuous,
            ..Self::default()
        }
    }
}

/// Drives a [`BatchExecutor`] according to the schedule policy.
pub struct ScheduleLoop<B: BatchExecutor> {
    batch: B,
    config: ScheduleConfig,
}

impl<B: BatchExecutor> ScheduleLoop<B> {
    pub fn new(batch: B, config: ScheduleConfig) -> Self {
        Self { batch, config }
    }

    /// Run until single-shot completion, fatal config error, or interrupt.
    ///
    /// Unclassified batch failures retry on the short interval without an
    /// attempt cap; only the operator or a config condition ends that.
    pub async fn run(&self, shutdown: &Shutdown) -> RunOutcome {
        loop {
            if shutdown.is_triggered() {
                warn!("stopped by operator");
                return RunOutcome::Interrupted;
            }

            match self.batch.run_batch().await {
                Ok(_) => {
                    if !self.config.continuous {
                        return RunOutcome::Completed;
                    }
                    info!(
                        "next run in {} seconds",
                        self.config.run_interval.as_secs()
                    );
                    if !shutdown.sleep(self.config.run_interval).await {
                        warn!("stopped by operator");
                        return RunOutcome::Interrupted;
                    }
                }
                Err(err) if err.is_fatal() => {
                    error!("{}", err);
                    return RunOutcome::FatalConfig;
                }
                Err(err) => {
                    warn!(
                        "batch failed unexpectedly: {}; retrying in {} seconds",
                        err,
                        self.config.retry_interval.as_secs()
                    );
                    if !shutdown.sleep(self.config.retry_interval).await {
                        warn!("stopped by operator");
                        return RunOutcome::Interrupted;
                    }
                    info!("retrying");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BatchResult;
    use crate::error::{Result, SignrError};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Batch executor that replays a scripted sequence of results.
    /// Clones share state so tests can keep a counter handle.
    #[derive(Clone)]
    struct ScriptedBatch {
        script: Arc<Mutex<Vec<Result<BatchResult>>>>,
        runs: Arc<AtomicUsize>,
    }

    impl ScriptedBatch {
        fn new(script: Vec<Result<BatchResult>>) -> Self {
            Self {
                script: Arc::new(Mutex::new(script)),
                runs: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn runs(&self) -> usize {
            self.runs.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BatchExecutor for ScriptedBatch {
        async fn run_batch(&self) -> Result<BatchResult> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            let mut script = self.script.lock().expect("script lock poisoned");
            if script.is_empty() {
                Ok(BatchResult {
                    total: 1,
                    succeeded: 1,
                })
            } else {
                script.remove(0)
            }
        }
    }

    fn ok_batch() -> Result<BatchResult> {
        Ok(BatchResult {
            total: 2,
            succeeded: 2,
        })
    }

    fn transient() -> Result<BatchResult> {
        Err(SignrError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "network blip",
        )))
    }

    fn tiny_intervals(continuous: bool) -> ScheduleConfig {
        ScheduleConfig {
            continuous,
            run_interval: Duration::from_millis(5),
            retry_interval: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn test_single_shot_completes_after_one_batch() {
        let batch = ScriptedBatch::new(vec![ok_batch()]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(false));

        let outcome = schedule.run(&Shutdown::new()).await;
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(batch.runs(), 1);
    }

    #[tokio::test]
    async fn test_fatal_config_stops_immediately() {
        let batch = ScriptedBatch::new(vec![Err(SignrError::NoAccounts)]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(true));

        let outcome = schedule.run(&Shutdown::new()).await;
        assert_eq!(outcome, RunOutcome::FatalConfig);
        assert_eq!(batch.runs(), 1);
    }

    #[tokio::test]
    async fn test_missing_config_stops_continuous_mode() {
        let batch = ScriptedBatch::new(vec![Err(SignrError::ConfigMissing(PathBuf::from(
            "config.json",
        )))]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(true));

        assert_eq!(schedule.run(&Shutdown::new()).await, RunOutcome::FatalConfig);
    }

    #[tokio::test]
    async fn test_transient_failure_retries_until_fatal() {
        // Three transient failures, then a fatal condition to end the test
        let batch = ScriptedBatch::new(vec![
            transient(),
            transient(),
            transient(),
            Err(SignrError::NoAccounts),
        ]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(true));

        let outcome = schedule.run(&Shutdown::new()).await;
        assert_eq!(outcome, RunOutcome::FatalConfig);
        assert_eq!(batch.runs(), 4);
    }

    #[tokio::test]
    async fn test_transient_failure_then_success_single_shot() {
        let batch = ScriptedBatch::new(vec![transient(), ok_batch()]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(false));

        let outcome = schedule.run(&Shutdown::new()).await;
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(batch.runs(), 2);
    }

    #[tokio::test]
    async fn test_continuous_mode_runs_again_after_interval() {
        // Two successes, then fatal to end the loop
        let batch = ScriptedBatch::new(vec![ok_batch(), ok_batch(), Err(SignrError::NoAccounts)]);
        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(true));

        schedule.run(&Shutdown::new()).await;
        assert_eq!(batch.runs(), 3);
    }

    #[tokio::test]
    async fn test_interrupt_during_long_sleep() {
        let batch = ScriptedBatch::new(vec![]);
        let config = ScheduleConfig {
            continuous: true,
            run_interval: Duration::from_secs(3600),
            retry_interval: Duration::from_secs(10),
        };
        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.trigger();
        });

        let schedule = ScheduleLoop::new(batch.clone(), config);
        let outcome = schedule.run(&shutdown).await;
        assert_eq!(outcome, RunOutcome::Interrupted);
        // One batch ran, then the hour-long sleep was cut short
        assert_eq!(batch.runs(), 1);
    }

    #[tokio::test]
    async fn test_interrupt_before_first_batch() {
        let batch = ScriptedBatch::new(vec![]);
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let schedule = ScheduleLoop::new(batch.clone(), tiny_intervals(true));
        let outcome = schedule.run(&shutdown).await;
        assert_eq!(outcome, RunOutcome::Interrupted);
        assert_eq!(batch.runs(), 0);
    }

    #[tokio::test]
    async fn test_default_intervals() {
        let config = ScheduleConfig::default();
        assert!(!config.continuous);
        assert_eq!(config.run_interval, Duration::from_secs(3600));
        assert_eq!(config.retry_interval, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_new_sets_continuous() {
        assert!(ScheduleConfig::new(true).continuous);
        assert!(!ScheduleConfig::new(false).continuous);
    }
}
