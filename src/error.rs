//! Error types for client configuration.
//!
//! This module contains error types used when constructing and validating
//! client configuration.
//!
//! # Error Handling
//!
//! Configuration parsing returns `Result<T, ConfigError>` to enable fail-fast
//! validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use faire_api::{ApiVersion, ConfigError};
//!
//! let result = "version-two".parse::<ApiVersion>();
//! assert!(matches!(result, Err(ConfigError::InvalidApiVersion { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when parsing
/// or loading configuration values. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API version string is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v1', 'v2', or 'v<N>' for future versions.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'. Set it before calling from_env().")]
    MissingEnvVar {
        /// The name of the missing environment variable.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "two".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("two"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_env_var_error_message() {
        let error = ConfigError::MissingEnvVar {
            name: "FAIRE_ACCESS_TOKEN",
        };
        let message = error.to_string();
        assert!(message.contains("FAIRE_ACCESS_TOKEN"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingEnvVar { name: "X" };
        let _: &dyn std::error::Error = &error;
    }
}
