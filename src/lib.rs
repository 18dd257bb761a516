//! signr - unattended daily check-in runner
//!
//! Drives a set of configured forum accounts through an
//! authenticate-then-check-in protocol, isolating per-account faults and
//! scheduling retries: hourly between successful batches, ten seconds
//! after an unexpected failure.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod network;
pub mod runner;
pub mod session;
pub mod shutdown;
pub mod timefmt;

pub use error::{Result, SignrError};
