//! # Faire API Rust Client
//!
//! A thin Rust client for the [Faire](https://www.faire.com) external REST
//! API, covering the `orders`, `products`, `brands`, and `retailers`
//! resource families.
//!
//! ## Overview
//!
//! This crate provides:
//! - A [`Client`] that owns one authenticated session and the four root
//!   resource pools
//! - Capability traits ([`Creatable`], [`Gettable`], [`Listable`],
//!   [`Searchable`], [`Updatable`], [`Deletable`]) composed per pool so the
//!   supported verb set of each endpoint is enforced at compile time
//! - Raw [`HttpResponse`] pass-through: no response schema is imposed, no
//!   status code is interpreted, and nothing is retried
//! - Configuration via [`FaireConfig`] with builder and environment loading
//!
//! ## Quick Start
//!
//! ```rust
//! use faire_api::{Client, Resource};
//!
//! let client = Client::new("my-access-token");
//! assert_eq!(
//!     client.products().endpoint(),
//!     "https://www.faire.com/external-api/v2/products"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! Capability methods live on traits, so bring the ones you need into scope:
//!
//! ```rust,ignore
//! use faire_api::{Client, Creatable, Gettable, Listable, Updatable};
//! use serde_json::json;
//!
//! let client = Client::new("my-access-token");
//!
//! // List open orders
//! let mut args = std::collections::HashMap::new();
//! args.insert("state".to_string(), "open".to_string());
//! let response = client.orders().fetch_list(Some(args)).await?;
//! println!("status {}: {}", response.code, response.body);
//!
//! // Create a product
//! let response = client
//!     .products()
//!     .create_item(&json!({"name": "Hand-poured Candle"}))
//!     .await?;
//!
//! // Update a variant's inventory by SKU
//! let response = client
//!     .products()
//!     .variants_inventory()
//!     .inventory_levels_by_skus()
//!     .update_item(&json!({"sku": "C-1", "on_hand_quantity": 40}), None)
//!     .await?;
//! ```
//!
//! ## Responses and Errors
//!
//! Every capability call returns the platform's response unmodified,
//! whatever its status code; inspect [`HttpResponse::code`] or opt into a
//! typed error with [`HttpResponse::error_for_status`]:
//!
//! ```rust,ignore
//! let order = client
//!     .orders()
//!     .fetch_item("bo_123")
//!     .await?
//!     .error_for_status()?; // RequestFailedError on non-2xx
//! let body = order.json()?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use faire_api::{ApiVersion, Client, FaireConfig};
//!
//! let config = FaireConfig::builder()
//!     .base_url("http://localhost:8080/external-api")
//!     .api_version(ApiVersion::V2)
//!     .build();
//!
//! let client = Client::with_config("my-access-token", &config);
//! ```
//!
//! `Client::from_env()` reads `FAIRE_ACCESS_TOKEN`, `FAIRE_BASE_URL`, and
//! `FAIRE_API_VERSION` instead.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Immutable session**: Headers are fixed at construction; multipart
//!   requests derive a per-request header set instead of mutating shared state
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Raw pass-through**: The caller owns response interpretation

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{Client, ACCESS_TOKEN_ENV_VAR};
pub use config::{AccessToken, ApiVersion, FaireConfig, FaireConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    FileAttachment, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RequestBody, RequestFailedError, ACCESS_TOKEN_HEADER,
};

// Re-export resource pools and capability traits
pub use resources::{
    urljoin, BrandsPool, BrandsProfilePool, Creatable, Deletable, Gettable, Listable,
    OrdersItemsAvailabilityPool, OrdersItemsPool, OrdersPool, OrdersProcessingPool,
    OrdersShipmentsPool, ProductsPool, ProductsPrepacksPool, ProductsTypesPool,
    ProductsVariantOptionSetsPool, ProductsVariantsInventoryLevelsPool,
    ProductsVariantsInventoryPool, ProductsVariantsPool, Resource, RetailersPool,
    RetailersPublicPool, Searchable, Updatable,
};
