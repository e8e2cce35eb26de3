//! Integration tests for client construction and URL building.
//!
//! These tests verify the client's root pool construction, nested endpoint
//! URLs, configuration handling, and the public type surface.

use faire_api::{ApiVersion, Client, FaireConfig, Resource};

// ============================================================================
// Root Pool Construction Tests
// ============================================================================

#[test]
fn test_root_pools_use_default_base_url_and_version() {
    let client = Client::new("TOKEN");

    assert_eq!(
        client.orders().endpoint(),
        "https://www.faire.com/external-api/v2/orders"
    );
    assert_eq!(
        client.products().endpoint(),
        "https://www.faire.com/external-api/v2/products"
    );
    assert_eq!(
        client.brands().endpoint(),
        "https://www.faire.com/external-api/v2/brands"
    );
    assert_eq!(
        client.retailers().endpoint(),
        "https://www.faire.com/external-api/v2/retailers"
    );
}

#[test]
fn test_api_version_override_changes_every_root() {
    let client = Client::with_version("TOKEN", ApiVersion::V1);

    assert_eq!(
        client.orders().endpoint(),
        "https://www.faire.com/external-api/v1/orders"
    );
    assert_eq!(
        client.products().endpoint(),
        "https://www.faire.com/external-api/v1/products"
    );
}

// ============================================================================
// Nested Endpoint Tests (the full path matrix)
// ============================================================================

#[test]
fn test_orders_child_endpoints() {
    let client = Client::new("TOKEN");
    let root = "https://www.faire.com/external-api/v2";

    assert_eq!(
        client.orders().processing("ORD123").endpoint(),
        format!("{root}/orders/ORD123/processing")
    );
    assert_eq!(
        client.orders().shipments("ORD123").endpoint(),
        format!("{root}/orders/ORD123/shipments")
    );
    assert_eq!(
        client.orders().items("ORD123").endpoint(),
        format!("{root}/orders/ORD123/items")
    );
    assert_eq!(
        client.orders().items("ORD123").availability().endpoint(),
        format!("{root}/orders/ORD123/items/availability")
    );
}

#[test]
fn test_products_child_endpoints() {
    let client = Client::new("TOKEN");
    let root = "https://www.faire.com/external-api/v2";

    assert_eq!(
        client.products().types().endpoint(),
        format!("{root}/products/types")
    );
    assert_eq!(
        client
            .products()
            .variants_inventory()
            .inventory_levels_by_product_variant_ids()
            .endpoint(),
        format!("{root}/products/variants/inventory-levels-by-product-variant-ids")
    );
    assert_eq!(
        client
            .products()
            .variants_inventory()
            .inventory_levels_by_skus()
            .endpoint(),
        format!("{root}/products/variants/inventory-levels-by-skus")
    );
    assert_eq!(
        client.products().prepacks("p_1").endpoint(),
        format!("{root}/products/p_1/prepacks")
    );
    assert_eq!(
        client.products().variant_option_sets("p_1").endpoint(),
        format!("{root}/products/p_1/variant-option-sets")
    );
    assert_eq!(
        client.products().variants("p_1").endpoint(),
        format!("{root}/products/p_1/variants")
    );
}

#[test]
fn test_brands_and_retailers_child_endpoints() {
    let client = Client::new("TOKEN");
    let root = "https://www.faire.com/external-api/v2";

    assert_eq!(
        client.brands().profile().endpoint(),
        format!("{root}/brands/profile")
    );
    assert_eq!(
        client.retailers().public().endpoint(),
        format!("{root}/retailers/public")
    );
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_custom_base_url() {
    let config = FaireConfig::builder()
        .base_url("http://localhost:8080/external-api")
        .build();
    let client = Client::with_config("TOKEN", &config);

    assert_eq!(
        client.orders().endpoint(),
        "http://localhost:8080/external-api/v2/orders"
    );
}

#[test]
fn test_from_env_reads_all_variables() {
    // Single test for all env manipulation so parallel tests cannot race it.
    std::env::set_var("FAIRE_ACCESS_TOKEN", "env-token");
    std::env::set_var("FAIRE_BASE_URL", "http://localhost:4000/external-api");
    std::env::set_var("FAIRE_API_VERSION", "v1");

    let client = Client::from_env().unwrap();
    assert_eq!(client.base_url(), "http://localhost:4000/external-api/v1");

    std::env::remove_var("FAIRE_BASE_URL");
    std::env::remove_var("FAIRE_API_VERSION");

    let client = Client::from_env().unwrap();
    assert_eq!(client.base_url(), "https://www.faire.com/external-api/v2");

    std::env::remove_var("FAIRE_ACCESS_TOKEN");
    let result = Client::from_env();
    assert!(matches!(
        result,
        Err(faire_api::ConfigError::MissingEnvVar {
            name: "FAIRE_ACCESS_TOKEN"
        })
    ));
}

// ============================================================================
// Public Surface Tests
// ============================================================================

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
    assert_send_sync::<faire_api::HttpClient>();
    assert_send_sync::<faire_api::OrdersPool>();
    assert_send_sync::<faire_api::ProductsPool>();
}

#[test]
fn test_pools_are_cheap_to_clone() {
    let client = Client::new("TOKEN");
    let orders = client.orders().clone();
    assert_eq!(orders.endpoint(), client.orders().endpoint());
}

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(faire_api::Client) = |_| {};
    let _: fn(faire_api::HttpResponse) = |_| {};
    let _: fn(faire_api::HttpError) = |_| {};
    let _: fn(faire_api::RequestFailedError) = |_| {};
    let _: fn(faire_api::FileAttachment) = |_| {};
}

#[test]
fn test_urljoin_exported_at_crate_root() {
    assert_eq!(faire_api::urljoin(["a/", "/b/", "c"]), "a/b/c");
}
