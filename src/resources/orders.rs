//! Order resource pools.
//!
//! The `orders` endpoint supports listing and fetching orders, with
//! per-order child pools for processing state, shipments, and items.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::capabilities::{Creatable, Gettable, Listable, Resource, Updatable};
use crate::resources::path::urljoin;

/// Pool for the `orders` endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use faire_api::{Client, Gettable, Listable};
///
/// let client = Client::new("my-token");
/// let orders = client.orders().fetch_list(None).await?;
/// let order = client.orders().fetch_item("bo_123").await?;
/// ```
#[derive(Clone, Debug)]
pub struct OrdersPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl OrdersPool {
    pub(crate) const fn new(endpoint: String, session: Arc<HttpClient>) -> Self {
        Self { endpoint, session }
    }

    /// Returns the pool for `orders/{order_id}/processing`.
    #[must_use]
    pub fn processing(&self, order_id: &str) -> OrdersProcessingPool {
        OrdersProcessingPool {
            endpoint: urljoin([self.endpoint.as_str(), order_id, "processing"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `orders/{order_id}/shipments`.
    #[must_use]
    pub fn shipments(&self, order_id: &str) -> OrdersShipmentsPool {
        OrdersShipmentsPool {
            endpoint: urljoin([self.endpoint.as_str(), order_id, "shipments"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `orders/{order_id}/items`.
    #[must_use]
    pub fn items(&self, order_id: &str) -> OrdersItemsPool {
        OrdersItemsPool {
            endpoint: urljoin([self.endpoint.as_str(), order_id, "items"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for OrdersPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Listable for OrdersPool {}
impl Gettable for OrdersPool {}

/// Pool for `orders/{order_id}/processing`. Supports update.
#[derive(Clone, Debug)]
pub struct OrdersProcessingPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for OrdersProcessingPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Updatable for OrdersProcessingPool {}

/// Pool for `orders/{order_id}/shipments`. Supports create.
#[derive(Clone, Debug)]
pub struct OrdersShipmentsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for OrdersShipmentsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Creatable for OrdersShipmentsPool {}

/// Pool for `orders/{order_id}/items`.
///
/// Carries no capability of its own; it exists to expose the
/// [`availability`](Self::availability) child pool.
#[derive(Clone, Debug)]
pub struct OrdersItemsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl OrdersItemsPool {
    /// Returns the pool for `orders/{order_id}/items/availability`.
    #[must_use]
    pub fn availability(&self) -> OrdersItemsAvailabilityPool {
        OrdersItemsAvailabilityPool {
            endpoint: urljoin([self.endpoint.as_str(), "availability"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for OrdersItemsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

/// Pool for `orders/{order_id}/items/availability`. Supports create.
#[derive(Clone, Debug)]
pub struct OrdersItemsAvailabilityPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for OrdersItemsAvailabilityPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Creatable for OrdersItemsAvailabilityPool {}
