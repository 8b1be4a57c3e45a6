//! Common types used throughout readiness-check
//!
//! The readiness record, its composite key, the verdict handed back to the
//! process boundary, and the canonical `YYYY-MM-DD` date form shared by all
//! of them.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Well-known DynamoDB table holding readiness records
pub const READINESS_TABLE: &str = "readiness-states";

/// Region used when none is given on the command line
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Canonical date format for keys and stored items
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Dates
// ============================================================================

/// Serialize a calendar date to its canonical `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a strict ISO `YYYY-MM-DD` date
///
/// Lenient forms that chrono would otherwise accept (`2024-3-1`) are
/// rejected, so every accepted string re-serializes to itself.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| Error::invalid_date(value))?;
    if format_date(date) != value {
        return Err(Error::invalid_date(value));
    }
    Ok(date)
}

// ============================================================================
// Records
// ============================================================================

/// Composite primary key of a readiness record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    /// Dataset name, used verbatim
    pub name: String,
    /// Date in `YYYY-MM-DD` form
    pub date: String,
}

impl RecordKey {
    /// Build the key for a dataset on a given date
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date: format_date(date),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.date)
    }
}

/// A readiness marker as returned by the store
///
/// `date` is the raw stored attribute, not the key that was asked for. It is
/// `None` when the stored attribute is not a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessRecord {
    pub name: String,
    pub date: Option<String>,
}

impl ReadinessRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: Some(date.into()),
        }
    }

    /// Create a record whose stored date is not a string
    pub fn without_date(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
        }
    }

    /// Whether this record confirms readiness for the given key
    pub fn confirms(&self, key: &RecordKey) -> bool {
        self.date.as_deref() == Some(key.date.as_str())
    }
}

// ============================================================================
// Verdict
// ============================================================================

/// Outcome of a readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Data has landed
    Ready,
    /// Data has not landed yet
    NotReady,
}

impl Verdict {
    /// Process exit status for this verdict
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Ready => 0,
            Verdict::NotReady => 1,
        }
    }
}

impl From<bool> for Verdict {
    fn from(ready: bool) -> Self {
        if ready {
            Verdict::Ready
        } else {
            Verdict::NotReady
        }
    }
}
