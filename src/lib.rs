//! # readiness-check
//!
//! A gate step for data pipelines: has the data for table X on date Y
//! landed yet?
//!
//! Readiness is recorded upstream as an item in a DynamoDB table keyed by
//! `(name, date)`. This crate performs a single point lookup for that key and
//! reports the answer, as a `bool` from the library or an exit code from the
//! binary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use readiness_check::{ReadinessChecker, READINESS_TABLE, DEFAULT_REGION};
//!
//! #[tokio::main]
//! async fn main() -> readiness_check::Result<()> {
//!     let checker = ReadinessChecker::connect(READINESS_TABLE, DEFAULT_REGION, None).await;
//!     let date = readiness_check::parse_date("2024-03-01")?;
//!     let ready = checker.check_ready("orders", date).await?;
//!     println!("ready: {ready}");
//!     Ok(())
//! }
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! | 0    | ready                           |
//! | 1    | not ready                       |
//! | 2    | usage error                     |
//! | 3    | missing credentials             |
//! | 4    | store error                     |

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Records, keys, verdicts and date handling
pub mod types;

/// Credential configuration
pub mod config;

/// Readiness stores (DynamoDB, in-memory)
pub mod store;

/// The readiness checker
pub mod checker;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use checker::ReadinessChecker;
pub use config::Credentials;
pub use error::{Error, Result};
pub use store::{DynamoDbStore, MemoryStore, ReadinessStore};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
