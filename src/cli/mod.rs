//! CLI module
//!
//! Command-line interface for the readiness gate.
//!
//! ```text
//! readiness-check --table-name <name> --date <YYYY-MM-DD> [--aws-region <region>]
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
