//! HTTP response types for the Faire API client.
//!
//! This module provides the [`HttpResponse`] envelope returned by every
//! capability call. The body is carried as raw text; no schema is imposed.

use std::collections::HashMap;

use crate::clients::errors::RequestFailedError;

/// An HTTP response from the Faire external API.
///
/// Contains the status code, headers, and the raw response body. The crate
/// performs no validation or deserialization of the body: a non-2xx response
/// is returned to the caller just like a 2xx one. Use [`json`](Self::json)
/// to parse the body on demand, or [`error_for_status`](Self::error_for_status)
/// to convert failures into a typed error.
///
/// # Example
///
/// ```rust
/// use faire_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"orders":[]}"#.to_string());
/// assert!(response.is_ok());
/// assert_eq!(response.json().unwrap()["orders"], serde_json::json!([]));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Lookup is case-insensitive; headers are stored lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Converts a non-2xx response into a [`RequestFailedError`].
    ///
    /// This is the opt-in typed wrapper for callers that prefer `?` over
    /// inspecting status codes; the error carries the status code and the
    /// raw body, so no information from the platform is lost.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailedError`] if the status code is outside 2xx.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faire_api::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(404, HashMap::new(), "missing".to_string());
    /// let error = response.error_for_status().unwrap_err();
    /// assert_eq!(error.code, 404);
    /// assert_eq!(error.body, "missing");
    /// ```
    pub fn error_for_status(self) -> Result<Self, RequestFailedError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(RequestFailedError {
                code: self.code,
                body: self.body,
            })
        }
    }
}
