//! Top-level client for the Faire external API.
//!
//! This module provides [`Client`], the single construction entry point.
//! The client builds the shared authenticated session, computes the
//! effective API root `{base_url}/{version}`, and hands out the four root
//! resource pools.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::{AccessToken, ApiVersion, FaireConfig};
use crate::error::ConfigError;
use crate::resources::{urljoin, BrandsPool, OrdersPool, ProductsPool, RetailersPool};

/// Environment variable read by [`Client::from_env`] for the access token.
pub const ACCESS_TOKEN_ENV_VAR: &str = "FAIRE_ACCESS_TOKEN";

/// Client for the Faire external API.
///
/// Owns the authenticated session and the four root resource pools
/// (`orders`, `products`, `brands`, `retailers`). Every pool derived from
/// one client shares the same session, so one client means one connection
/// pool and one set of auth headers.
///
/// Construction never fails: the token is not validated locally, and a bad
/// token surfaces as an authentication error from the platform on the first
/// request.
///
/// # Example
///
/// ```rust
/// use faire_api::{Client, Resource};
///
/// let client = Client::new("my-token");
/// assert_eq!(
///     client.products().endpoint(),
///     "https://www.faire.com/external-api/v2/products"
/// );
/// ```
///
/// Issuing requests (capability traits must be in scope):
///
/// ```rust,ignore
/// use faire_api::{Client, Gettable, Listable};
/// use std::collections::HashMap;
///
/// let client = Client::new("my-token");
///
/// let mut args = HashMap::new();
/// args.insert("limit".to_string(), "50".to_string());
/// let orders = client.orders().fetch_list(Some(args)).await?;
///
/// let order = client.orders().fetch_item("bo_123").await?;
/// ```
#[derive(Debug)]
pub struct Client {
    session: Arc<HttpClient>,
    base_url: String,
    orders: OrdersPool,
    products: ProductsPool,
    brands: BrandsPool,
    retailers: RetailersPool,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client with the default base URL and API version.
    #[must_use]
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self::with_config(access_token, &FaireConfig::default())
    }

    /// Creates a client with an API version override.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faire_api::{ApiVersion, Client, Resource};
    ///
    /// let client = Client::with_version("my-token", ApiVersion::V1);
    /// assert_eq!(
    ///     client.orders().endpoint(),
    ///     "https://www.faire.com/external-api/v1/orders"
    /// );
    /// ```
    #[must_use]
    pub fn with_version(access_token: impl Into<AccessToken>, api_version: ApiVersion) -> Self {
        let config = FaireConfig::builder().api_version(api_version).build();
        Self::with_config(access_token, &config)
    }

    /// Creates a client with an explicit configuration.
    #[must_use]
    pub fn with_config(access_token: impl Into<AccessToken>, config: &FaireConfig) -> Self {
        let access_token = access_token.into();
        let session = Arc::new(HttpClient::new(&access_token));

        let version = config.api_version().to_string();
        let base_url = urljoin([config.base_url(), version.as_str()]);

        tracing::debug!(base_url = %base_url, "constructed Faire API client");

        Self {
            orders: OrdersPool::new(
                urljoin([base_url.as_str(), "orders"]),
                Arc::clone(&session),
            ),
            products: ProductsPool::new(
                urljoin([base_url.as_str(), "products"]),
                Arc::clone(&session),
            ),
            brands: BrandsPool::new(
                urljoin([base_url.as_str(), "brands"]),
                Arc::clone(&session),
            ),
            retailers: RetailersPool::new(
                urljoin([base_url.as_str(), "retailers"]),
                Arc::clone(&session),
            ),
            session,
            base_url,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads the required `FAIRE_ACCESS_TOKEN`, plus the optional
    /// `FAIRE_BASE_URL` and `FAIRE_API_VERSION` (see
    /// [`FaireConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `FAIRE_ACCESS_TOKEN` is not
    /// set, or [`ConfigError::InvalidApiVersion`] if `FAIRE_API_VERSION` does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(ACCESS_TOKEN_ENV_VAR).map_err(|_| {
            ConfigError::MissingEnvVar {
                name: ACCESS_TOKEN_ENV_VAR,
            }
        })?;
        let config = FaireConfig::from_env()?;

        Ok(Self::with_config(AccessToken::new(token), &config))
    }

    /// Returns the effective API root, `{base_url}/{version}`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the shared HTTP session.
    #[must_use]
    pub fn session(&self) -> &HttpClient {
        &self.session
    }

    /// Returns the root pool for the `orders` endpoint.
    #[must_use]
    pub const fn orders(&self) -> &OrdersPool {
        &self.orders
    }

    /// Returns the root pool for the `products` endpoint.
    #[must_use]
    pub const fn products(&self) -> &ProductsPool {
        &self.products
    }

    /// Returns the root pool for the `brands` endpoint.
    #[must_use]
    pub const fn brands(&self) -> &BrandsPool {
        &self.brands
    }

    /// Returns the root pool for the `retailers` endpoint.
    #[must_use]
    pub const fn retailers(&self) -> &RetailersPool {
        &self.retailers
    }
}
