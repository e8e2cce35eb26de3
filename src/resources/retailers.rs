//! Retailer resource pools.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::capabilities::{Gettable, Resource};
use crate::resources::path::urljoin;

/// Pool for the `retailers` endpoint.
///
/// Carries no capability of its own; it exists to expose the
/// [`public`](Self::public) child pool.
#[derive(Clone, Debug)]
pub struct RetailersPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl RetailersPool {
    pub(crate) const fn new(endpoint: String, session: Arc<HttpClient>) -> Self {
        Self { endpoint, session }
    }

    /// Returns the pool for `retailers/public`.
    #[must_use]
    pub fn public(&self) -> RetailersPublicPool {
        RetailersPublicPool {
            endpoint: urljoin([self.endpoint.as_str(), "public"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for RetailersPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

/// Pool for `retailers/public`. Supports get.
#[derive(Clone, Debug)]
pub struct RetailersPublicPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for RetailersPublicPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Gettable for RetailersPublicPool {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    #[test]
    fn test_public_endpoint_and_session_binding() {
        let pool = RetailersPool::new(
            "https://www.faire.com/external-api/v2/retailers".to_string(),
            Arc::new(HttpClient::new(&AccessToken::new("test-token"))),
        );
        let public = pool.public();
        assert_eq!(
            public.endpoint(),
            "https://www.faire.com/external-api/v2/retailers/public"
        );
        assert!(std::ptr::eq(pool.session(), public.session()));
    }
}
