//! Brand resource pools.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::capabilities::{Listable, Resource};
use crate::resources::path::urljoin;

/// Pool for the `brands` endpoint.
///
/// Carries no capability of its own; it exists to expose the
/// [`profile`](Self::profile) child pool.
#[derive(Clone, Debug)]
pub struct BrandsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl BrandsPool {
    pub(crate) const fn new(endpoint: String, session: Arc<HttpClient>) -> Self {
        Self { endpoint, session }
    }

    /// Returns the pool for `brands/profile`.
    #[must_use]
    pub fn profile(&self) -> BrandsProfilePool {
        BrandsProfilePool {
            endpoint: urljoin([self.endpoint.as_str(), "profile"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for BrandsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

/// Pool for `brands/profile`. Supports list.
#[derive(Clone, Debug)]
pub struct BrandsProfilePool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for BrandsProfilePool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Listable for BrandsProfilePool {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    #[test]
    fn test_profile_endpoint() {
        let pool = BrandsPool::new(
            "https://www.faire.com/external-api/v2/brands".to_string(),
            Arc::new(HttpClient::new(&AccessToken::new("test-token"))),
        );
        assert_eq!(
            pool.profile().endpoint(),
            "https://www.faire.com/external-api/v2/brands/profile"
        );
    }
}
