//! Configuration types for the Faire API client.
//!
//! This module provides the configuration used to initialize a [`crate::Client`]:
//! the API base URL and the API version.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`FaireConfig`]: The configuration struct holding the base URL and version
//! - [`FaireConfigBuilder`]: A builder for constructing [`FaireConfig`] instances
//! - [`ApiVersion`]: The API version to use
//! - [`AccessToken`]: The access token credential newtype
//!
//! # Example
//!
//! ```rust
//! use faire_api::{ApiVersion, FaireConfig};
//!
//! let config = FaireConfig::builder()
//!     .base_url("https://www.faire.com/external-api")
//!     .api_version(ApiVersion::V2)
//!     .build();
//!
//! assert_eq!(config.base_url(), "https://www.faire.com/external-api");
//! ```

mod newtypes;
mod version;

pub use newtypes::AccessToken;
pub use version::ApiVersion;

use crate::error::ConfigError;

/// The default base URL of the Faire external API.
pub const DEFAULT_BASE_URL: &str = "https://www.faire.com/external-api";

/// Environment variable read by [`FaireConfig::from_env`] for the base URL.
pub const BASE_URL_ENV_VAR: &str = "FAIRE_BASE_URL";

/// Environment variable read by [`FaireConfig::from_env`] for the API version.
pub const API_VERSION_ENV_VAR: &str = "FAIRE_API_VERSION";

/// Configuration for the Faire API client.
///
/// Holds the API base URL and version used to compute the effective request
/// root `{base_url}/{api_version}`. Both fields have defaults, so
/// construction never fails.
///
/// # Thread Safety
///
/// `FaireConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use faire_api::{ApiVersion, FaireConfig};
///
/// let config = FaireConfig::default();
/// assert_eq!(config.base_url(), "https://www.faire.com/external-api");
/// assert_eq!(config.api_version(), &ApiVersion::V2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaireConfig {
    base_url: String,
    api_version: ApiVersion,
}

impl FaireConfig {
    /// Creates a new builder for constructing a `FaireConfig`.
    #[must_use]
    pub fn builder() -> FaireConfigBuilder {
        FaireConfigBuilder::new()
    }

    /// Loads configuration from the environment.
    ///
    /// Reads the optional `FAIRE_BASE_URL` and `FAIRE_API_VERSION` variables,
    /// falling back to the defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `FAIRE_API_VERSION` is
    /// set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            builder = builder.base_url(base_url);
        }
        if let Ok(version) = std::env::var(API_VERSION_ENV_VAR) {
            builder = builder.api_version(version.parse()?);
        }

        Ok(builder.build())
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }
}

impl Default for FaireConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify FaireConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FaireConfig>();
};

/// Builder for constructing [`FaireConfig`] instances.
///
/// All fields are optional; [`build`](Self::build) is infallible.
///
/// # Defaults
///
/// - `base_url`: `https://www.faire.com/external-api`
/// - `api_version`: [`ApiVersion::latest`]
///
/// # Example
///
/// ```rust
/// use faire_api::{ApiVersion, FaireConfig};
///
/// let config = FaireConfig::builder()
///     .base_url("http://localhost:8080/external-api")
///     .api_version(ApiVersion::V1)
///     .build();
///
/// assert_eq!(config.api_version(), &ApiVersion::V1);
/// ```
#[derive(Debug, Default)]
pub struct FaireConfigBuilder {
    base_url: Option<String>,
    api_version: Option<ApiVersion>,
}

impl FaireConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Builds the [`FaireConfig`], applying defaults for unset fields.
    #[must_use]
    pub fn build(self) -> FaireConfig {
        FaireConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
        }
    }
}
