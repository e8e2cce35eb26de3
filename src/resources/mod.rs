//! Resource pools for the Faire external API.
//!
//! A pool is a lightweight value binding one endpoint URL to the shared
//! session. Pools compose capability traits ([`Creatable`], [`Gettable`],
//! [`Listable`], [`Searchable`], [`Updatable`], [`Deletable`]) to express
//! exactly which HTTP verbs their endpoint supports, and expose child pools
//! for nested endpoints.
//!
//! The hierarchy (capabilities in parentheses):
//!
//! - `orders` (list, get) → `processing(id)` (update); `shipments(id)`
//!   (create); `items(id)` → `availability` (create)
//! - `products` (list, get, create, update, delete) → `types` (list);
//!   `variants_inventory` → `inventory_levels_by_product_variant_ids` /
//!   `inventory_levels_by_skus` (update); `prepacks(id)` (create, get, list,
//!   delete); `variant_option_sets(id)` (update); `variants(id)` (create,
//!   update, delete)
//! - `brands` → `profile` (list)
//! - `retailers` → `public` (get)

mod brands;
mod capabilities;
mod orders;
mod path;
mod products;
mod retailers;

pub use brands::{BrandsPool, BrandsProfilePool};
pub use capabilities::{
    Creatable, Deletable, Gettable, Listable, Resource, Searchable, Updatable,
};
pub use orders::{
    OrdersItemsAvailabilityPool, OrdersItemsPool, OrdersPool, OrdersProcessingPool,
    OrdersShipmentsPool,
};
pub use path::urljoin;
pub use products::{
    ProductsPool, ProductsPrepacksPool, ProductsTypesPool, ProductsVariantOptionSetsPool,
    ProductsVariantsInventoryLevelsPool, ProductsVariantsInventoryPool, ProductsVariantsPool,
};
pub use retailers::{RetailersPool, RetailersPublicPool};
