//! CLI module for signr - command-line interface.

pub mod commands;

pub use commands::Cli;
