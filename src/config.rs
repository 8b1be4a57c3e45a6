//! Credential configuration
//!
//! Credentials are read once at startup and passed explicitly into session
//! construction.

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Optional environment variable holding a session token
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Static AWS credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create credentials without a session token
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through a variable lookup
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::missing_credentials(name))
        };

        Ok(Self {
            access_key_id: required(ACCESS_KEY_ID_VAR)?,
            secret_access_key: required(SECRET_ACCESS_KEY_VAR)?,
            session_token: lookup(SESSION_TOKEN_VAR).filter(|v| !v.is_empty()),
        })
    }
}

// Never print the secret
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}
