//! Faire API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Faire external API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Faire external API version.
///
/// The version appears as a path segment in every request URL
/// (`{base}/{version}/...`). This enum provides variants for the known
/// versions plus a `Custom` variant for future ones.
///
/// # Example
///
/// ```rust
/// use faire_api::ApiVersion;
///
/// // Use the latest version
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V2);
///
/// // Parse from string
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V2), "v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1 (legacy).
    V1,
    /// API version 2 (current).
    V2,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: v<digits>
        match s.strip_prefix('v') {
            Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
