//! Product resource pools.
//!
//! The `products` endpoint carries the full capability set and the deepest
//! child hierarchy: product types, variant inventory levels, prepacks,
//! variant option sets, and variants.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::capabilities::{
    Creatable, Deletable, Gettable, Listable, Resource, Updatable,
};
use crate::resources::path::urljoin;

/// Pool for the `products` endpoint.
///
/// Supports list, get, create, update, and delete, and exposes the nested
/// product pools.
///
/// # Example
///
/// ```rust,ignore
/// use faire_api::{Client, Creatable, Updatable};
/// use serde_json::json;
///
/// let client = Client::new("my-token");
/// client.products().create_item(&json!({"name": "Candle"})).await?;
/// client
///     .products()
///     .variants("p_123")
///     .update_item(&json!({"sku": "C-1"}), Some("v_456"))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct ProductsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl ProductsPool {
    pub(crate) const fn new(endpoint: String, session: Arc<HttpClient>) -> Self {
        Self { endpoint, session }
    }

    /// Returns the pool for `products/types`.
    #[must_use]
    pub fn types(&self) -> ProductsTypesPool {
        ProductsTypesPool {
            endpoint: urljoin([self.endpoint.as_str(), "types"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `products/variants`, the parent of the
    /// inventory-level endpoints.
    #[must_use]
    pub fn variants_inventory(&self) -> ProductsVariantsInventoryPool {
        ProductsVariantsInventoryPool {
            endpoint: urljoin([self.endpoint.as_str(), "variants"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `products/{product_id}/prepacks`.
    #[must_use]
    pub fn prepacks(&self, product_id: &str) -> ProductsPrepacksPool {
        ProductsPrepacksPool {
            endpoint: urljoin([self.endpoint.as_str(), product_id, "prepacks"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `products/{product_id}/variant-option-sets`.
    #[must_use]
    pub fn variant_option_sets(&self, product_id: &str) -> ProductsVariantOptionSetsPool {
        ProductsVariantOptionSetsPool {
            endpoint: urljoin([self.endpoint.as_str(), product_id, "variant-option-sets"]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `products/{product_id}/variants`.
    #[must_use]
    pub fn variants(&self, product_id: &str) -> ProductsVariantsPool {
        ProductsVariantsPool {
            endpoint: urljoin([self.endpoint.as_str(), product_id, "variants"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for ProductsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Listable for ProductsPool {}
impl Gettable for ProductsPool {}
impl Creatable for ProductsPool {}
impl Updatable for ProductsPool {}
impl Deletable for ProductsPool {}

/// Pool for `products/types`. Supports list.
#[derive(Clone, Debug)]
pub struct ProductsTypesPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for ProductsTypesPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Listable for ProductsTypesPool {}

/// Pool for `products/variants`.
///
/// Carries no capability of its own; it exposes the two inventory-level
/// child pools, which share one pool type since they behave identically.
#[derive(Clone, Debug)]
pub struct ProductsVariantsInventoryPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl ProductsVariantsInventoryPool {
    /// Returns the pool for
    /// `products/variants/inventory-levels-by-product-variant-ids`.
    #[must_use]
    pub fn inventory_levels_by_product_variant_ids(&self) -> ProductsVariantsInventoryLevelsPool {
        ProductsVariantsInventoryLevelsPool {
            endpoint: urljoin([
                self.endpoint.as_str(),
                "inventory-levels-by-product-variant-ids",
            ]),
            session: Arc::clone(&self.session),
        }
    }

    /// Returns the pool for `products/variants/inventory-levels-by-skus`.
    #[must_use]
    pub fn inventory_levels_by_skus(&self) -> ProductsVariantsInventoryLevelsPool {
        ProductsVariantsInventoryLevelsPool {
            endpoint: urljoin([self.endpoint.as_str(), "inventory-levels-by-skus"]),
            session: Arc::clone(&self.session),
        }
    }
}

impl Resource for ProductsVariantsInventoryPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

/// Pool for the variant inventory-level endpoints. Supports update.
#[derive(Clone, Debug)]
pub struct ProductsVariantsInventoryLevelsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for ProductsVariantsInventoryLevelsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Updatable for ProductsVariantsInventoryLevelsPool {}

/// Pool for `products/{product_id}/prepacks`.
/// Supports create, get, list, and delete.
#[derive(Clone, Debug)]
pub struct ProductsPrepacksPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for ProductsPrepacksPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Creatable for ProductsPrepacksPool {}
impl Gettable for ProductsPrepacksPool {}
impl Listable for ProductsPrepacksPool {}
impl Deletable for ProductsPrepacksPool {}

/// Pool for `products/{product_id}/variant-option-sets`. Supports update.
#[derive(Clone, Debug)]
pub struct ProductsVariantOptionSetsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for ProductsVariantOptionSetsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Updatable for ProductsVariantOptionSetsPool {}

/// Pool for `products/{product_id}/variants`.
/// Supports create, update, and delete.
#[derive(Clone, Debug)]
pub struct ProductsVariantsPool {
    endpoint: String,
    session: Arc<HttpClient>,
}

impl Resource for ProductsVariantsPool {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> &HttpClient {
        &self.session
    }
}

impl Creatable for ProductsVariantsPool {}
impl Updatable for ProductsVariantsPool {}
impl Deletable for ProductsVariantsPool {}
