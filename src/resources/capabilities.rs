//! Capability traits for resource pools.
//!
//! Each trait in this module is one HTTP-verb-shaped operation that a pool
//! can support. A concrete pool opts into a capability by implementing the
//! marker trait; the default methods do the work against the pool's
//! endpoint and shared session. Calling an operation a pool has not
//! declared is a compile error, so the verb/path matrix of the API is
//! enforced statically.
//!
//! None of the operations validate the item shape, interpret status codes,
//! or retry: the raw [`HttpResponse`] is returned whatever the platform
//! answered, and only network or request-construction failures produce an
//! `Err`.
//!
//! # Implementing a pool
//!
//! ```rust,ignore
//! use faire_api::{Gettable, HttpClient, Listable, Resource};
//!
//! struct WidgetsPool {
//!     endpoint: String,
//!     session: std::sync::Arc<HttpClient>,
//! }
//!
//! impl Resource for WidgetsPool {
//!     fn endpoint(&self) -> &str {
//!         &self.endpoint
//!     }
//!
//!     fn session(&self) -> &HttpClient {
//!         &self.session
//!     }
//! }
//!
//! impl Listable for WidgetsPool {}
//! impl Gettable for WidgetsPool {}
//!
//! // pool.fetch_list(None).await / pool.fetch_item("W1").await now exist;
//! // pool.delete_item("W1") does not compile.
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{
    FileAttachment, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
};
use crate::resources::path::urljoin;

/// A resource pool: an endpoint URL bound to the shared session.
///
/// This is the base trait every capability builds on. Implementors carry no
/// state beyond the binding; pools are cheap values created on demand by
/// the client or a parent pool.
pub trait Resource {
    /// Returns the absolute endpoint URL this pool issues requests against.
    fn endpoint(&self) -> &str;

    /// Returns the shared HTTP session.
    fn session(&self) -> &HttpClient;
}

/// Capability to create items with a POST to the pool's endpoint.
#[allow(async_fn_in_trait)]
pub trait Creatable: Resource {
    /// Creates an item by POSTing a JSON body to the pool's endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn create_item(&self, item: &Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.endpoint())
            .json_body(item.clone())
            .build()?;
        self.session().request(request).await
    }

    /// Creates an item with file attachments via a multipart POST.
    ///
    /// The item's top-level object entries become text form fields (string
    /// values verbatim, other values JSON-encoded); the files become file
    /// parts. The session's `Content-Type`/`Accept` defaults are suppressed
    /// for this one request so the transport sets the multipart boundary.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures or an invalid attachment
    /// MIME type; any HTTP status is returned as `Ok`.
    async fn create_item_with_files(
        &self,
        item: &Value,
        files: Vec<FileAttachment>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.endpoint())
            .multipart_body(form_fields(item), files)
            .build()?;
        self.session().request(request).await
    }
}

/// Capability to fetch a single item by code.
#[allow(async_fn_in_trait)]
pub trait Gettable: Resource {
    /// Fetches the item at `{endpoint}/{code}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn fetch_item(&self, code: &str) -> Result<HttpResponse, HttpError> {
        let url = urljoin([self.endpoint(), code]);
        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        self.session().request(request).await
    }
}

/// Capability to list items with optional query parameters.
#[allow(async_fn_in_trait)]
pub trait Listable: Resource {
    /// Fetches the collection at the pool's endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn fetch_list(
        &self,
        args: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, self.endpoint());
        if let Some(args) = args {
            builder = builder.query(args);
        }
        let request = builder.build()?;
        self.session().request(request).await
    }
}

/// Capability to search the pool's endpoint with a `query` parameter.
#[allow(async_fn_in_trait)]
pub trait Searchable: Resource {
    /// Issues a GET with a single `query` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn search(&self, query: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.endpoint())
            .query_param("query", query)
            .build()?;
        self.session().request(request).await
    }
}

/// Capability to update items with PUT (create-or-replace) and PATCH
/// (partial update).
#[allow(async_fn_in_trait)]
pub trait Updatable: Resource {
    /// Creates or replaces an item with a PUT.
    ///
    /// The request targets `{endpoint}/{code}` when a code is given, the
    /// pool's endpoint otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn update_create_item(
        &self,
        item: &Value,
        code: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let url = code.map_or_else(
            || self.endpoint().to_string(),
            |code| urljoin([self.endpoint(), code]),
        );
        let request = HttpRequest::builder(HttpMethod::Put, url)
            .json_body(item.clone())
            .build()?;
        self.session().request(request).await
    }

    /// Partially updates an item with a PATCH.
    ///
    /// The request targets `{endpoint}/{code}` when a code is given, the
    /// pool's endpoint otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn update_item(
        &self,
        item: &Value,
        code: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let url = code.map_or_else(
            || self.endpoint().to_string(),
            |code| urljoin([self.endpoint(), code]),
        );
        let request = HttpRequest::builder(HttpMethod::Patch, url)
            .json_body(item.clone())
            .build()?;
        self.session().request(request).await
    }
}

/// Capability to delete a single item by code.
#[allow(async_fn_in_trait)]
pub trait Deletable: Resource {
    /// Deletes the item at `{endpoint}/{code}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures; any HTTP status is
    /// returned as `Ok`.
    async fn delete_item(&self, code: &str) -> Result<HttpResponse, HttpError> {
        let url = urljoin([self.endpoint(), code]);
        let request = HttpRequest::builder(HttpMethod::Delete, url).build()?;
        self.session().request(request).await
    }
}

/// Flattens an item's top-level object entries into multipart text fields.
///
/// String values are sent verbatim; other values are JSON-encoded.
/// Non-object items produce no fields.
fn form_fields(item: &Value) -> Vec<(String, String)> {
    match item {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_fields_sends_strings_verbatim() {
        let fields = form_fields(&json!({"name": "Candle", "sku": "C-1"}));
        assert!(fields.contains(&("name".to_string(), "Candle".to_string())));
        assert!(fields.contains(&("sku".to_string(), "C-1".to_string())));
    }

    #[test]
    fn test_form_fields_json_encodes_non_strings() {
        let fields = form_fields(&json!({"quantity": 3, "active": true}));
        assert!(fields.contains(&("quantity".to_string(), "3".to_string())));
        assert!(fields.contains(&("active".to_string(), "true".to_string())));
    }

    #[test]
    fn test_form_fields_json_encodes_nested_values() {
        let fields = form_fields(&json!({"variant": {"sku": "C-1"}}));
        assert_eq!(
            fields,
            vec![("variant".to_string(), r#"{"sku":"C-1"}"#.to_string())]
        );
    }

    #[test]
    fn test_form_fields_non_object_item_is_empty() {
        assert!(form_fields(&json!("just a string")).is_empty());
        assert!(form_fields(&json!([1, 2, 3])).is_empty());
    }
}
