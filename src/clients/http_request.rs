//! HTTP request types for the Faire API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against a resource pool's endpoint.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Faire external API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for creating or replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A file to attach to a multipart create request.
///
/// # Example
///
/// ```rust
/// use faire_api::FileAttachment;
///
/// let image = FileAttachment::new("image", "front.png", vec![0x89, 0x50])
///     .mime_type("image/png");
/// assert_eq!(image.file_name, "front.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAttachment {
    /// The multipart field name the file is attached under.
    pub field_name: String,
    /// The file name reported to the server.
    pub file_name: String,
    /// The raw file contents.
    pub contents: Vec<u8>,
    /// Optional MIME type; the transport picks a default when absent.
    pub mime_type: Option<String>,
}

impl FileAttachment {
    /// Creates a new file attachment.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        contents: Vec<u8>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            contents,
            mime_type: None,
        }
    }

    /// Sets the MIME type of the attachment.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// The body of an HTTP request.
///
/// JSON bodies carry `Content-Type: application/json`. Multipart bodies let
/// the transport set the content type (including the form boundary), so the
/// session's `Content-Type`/`Accept` defaults are suppressed for that one
/// request.
#[derive(Clone, Debug)]
pub enum RequestBody {
    /// A JSON-encoded body.
    Json(serde_json::Value),
    /// A multipart form body with text fields and file parts.
    Multipart {
        /// Text form fields, sent in order.
        fields: Vec<(String, String)>,
        /// File parts.
        files: Vec<FileAttachment>,
    },
}

/// An HTTP request to be sent to the Faire external API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use faire_api::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.example.com/orders")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://api.example.com/products")
///     .json_body(json!({"name": "Candle"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `url` - The absolute URL for the request
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post`, `Put`, or `Patch` but no body is set.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(
            self.http_method,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch
        ) && self.body.is_none()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and URL.
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a multipart form body with text fields and file attachments.
    #[must_use]
    pub fn multipart_body(
        mut self,
        fields: Vec<(String, String)>,
        files: Vec<FileAttachment>,
    ) -> Self {
        self.body = Some(RequestBody::Multipart { fields, files });
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/orders")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com/orders");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "https://example.com/products")
            .json_body(json!({"name": "Candle"}))
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(matches!(request.body, Some(RequestBody::Json(_))));
    }

    #[test]
    fn test_verify_requires_body_for_post_put_patch() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            let result = HttpRequest::builder(method, "https://example.com/x").build();
            assert!(
                matches!(result, Err(InvalidHttpRequestError::MissingBody { .. })),
                "expected MissingBody for {method}"
            );
        }
    }

    #[test]
    fn test_verify_allows_bodiless_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            assert!(HttpRequest::builder(method, "https://example.com/x")
                .build()
                .is_ok());
        }
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/orders")
            .query_param("limit", "50")
            .query_param("state", "open")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("state"), Some(&"open".to_string()));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/orders")
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_multipart_body_holds_fields_and_files() {
        let request = HttpRequest::builder(HttpMethod::Post, "https://example.com/products")
            .multipart_body(
                vec![("name".to_string(), "Candle".to_string())],
                vec![FileAttachment::new("image", "a.png", vec![1, 2, 3])],
            )
            .build()
            .unwrap();

        match request.body {
            Some(RequestBody::Multipart { fields, files }) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].file_name, "a.png");
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[test]
    fn test_file_attachment_mime_type_setter() {
        let file = FileAttachment::new("image", "a.png", vec![]).mime_type("image/png");
        assert_eq!(file.mime_type.as_deref(), Some("image/png"));
    }
}
