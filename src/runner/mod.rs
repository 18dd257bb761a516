//! Batch execution engine.
//!
//! This module provides the three layers of the engine:
//! - AccountProcessor: one account, fault-isolated
//! - BatchRunner: one pass over all configured accounts
//! - ScheduleLoop: repeats batches until stopped

mod account;
mod batch;
mod schedule;

pub use account::AccountProcessor;
pub use batch::{BatchExecutor, BatchRunner};
pub use schedule::{ScheduleConfig, ScheduleLoop};
