//! Error types for readiness-check
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A "not ready" verdict is not an error; it is a normal `Ok(false)`.

use thiserror::Error;

/// Exit status for usage errors, matching clap's convention
pub const EXIT_USAGE: u8 = 2;

/// Exit status for missing or invalid configuration
pub const EXIT_CONFIG: u8 = 3;

/// Exit status for store failures
pub const EXIT_STORE: u8 = 4;

/// The main error type for readiness-check
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Missing environment variable {variable}: please provide AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY")]
    MissingCredentials { variable: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("--date needs to be in iso format (yyyy-mm-dd), got '{value}'")]
    InvalidDate { value: String },

    #[error("Table name must not be empty")]
    EmptyTableName,

    // ============================================================================
    // Store Errors
    // ============================================================================
    #[error("DynamoDB error for key {key}: {message}")]
    Store { key: String, message: String },

    #[error("Malformed item for key {key}: {message}")]
    MalformedItem { key: String, message: String },
}

impl Error {
    /// Create a missing credentials error
    pub fn missing_credentials(variable: impl Into<String>) -> Self {
        Self::MissingCredentials {
            variable: variable.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Create a store error
    pub fn store(key: impl ToString, message: impl Into<String>) -> Self {
        Self::Store {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Create a malformed item error
    pub fn malformed_item(key: impl ToString, message: impl Into<String>) -> Self {
        Self::MalformedItem {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingCredentials { .. } | Error::Config { .. } => EXIT_CONFIG,
            Error::InvalidDate { .. } | Error::EmptyTableName => EXIT_USAGE,
            Error::Store { .. } | Error::MalformedItem { .. } => EXIT_STORE,
        }
    }
}

/// Result type alias for readiness-check
pub type Result<T> = std::result::Result<T, Error>;
