//! Newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around string values so that
//! credentials cannot be confused with ordinary strings, and do not leak
//! into log output.

use std::fmt;

/// A Faire access token.
///
/// The token is sent verbatim in the `X-FAIRE-ACCESS-TOKEN` header of every
/// request. No validation is performed at construction: an empty or malformed
/// token surfaces later as an authentication error from the platform.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual credential.
///
/// # Example
///
/// ```rust
/// use faire_api::AccessToken;
///
/// let token = AccessToken::new("my-token");
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}
