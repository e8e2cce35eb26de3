//! HTTP client for Faire API communication.
//!
//! This module provides the [`HttpClient`] type: the shared, authenticated
//! session that every resource pool issues its requests through.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::AccessToken;

/// Header carrying the access token on every request.
pub const ACCESS_TOKEN_HEADER: &str = "X-FAIRE-ACCESS-TOKEN";

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP session for making requests to the Faire external API.
///
/// The session owns the underlying transport and a default header map
/// (access token, `Accept`, `User-Agent`). It is immutable after
/// construction: each request derives its own header set from the defaults,
/// so issuing a multipart request never disturbs the headers of any other
/// request sharing the session.
///
/// Every capability call is a single attempt. There is no retry logic, no
/// status-code interpretation, and no response body parsing; the raw
/// [`HttpResponse`] is handed back to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use faire_api::{AccessToken, HttpClient, HttpMethod, HttpRequest};
///
/// let session = HttpClient::new(&AccessToken::new("my-token"));
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://www.faire.com/external-api/v2/orders",
/// )
/// .build()
/// .unwrap();
///
/// let response = session.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP session authenticated with the given token.
    ///
    /// The token is sent verbatim on every request, even when empty; a bad
    /// token surfaces as an authentication error from the platform, not here.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(access_token: &AccessToken) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Faire API Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            access_token.as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this session.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Faire external API.
    ///
    /// This method handles:
    /// - Request validation
    /// - Per-request header derivation (JSON bodies get
    ///   `Content-Type: application/json`; multipart bodies suppress the
    ///   session's `Content-Type`/`Accept` so the transport can set the
    ///   form boundary)
    /// - Dispatch of exactly one attempt
    ///
    /// The response is returned whatever its status code; callers inspect
    /// [`HttpResponse::code`] or use [`HttpResponse::error_for_status`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let HttpRequest {
            http_method,
            url,
            body,
            query,
            extra_headers,
        } = request;

        let mut headers = self.default_headers.clone();
        match &body {
            Some(RequestBody::Json(_)) => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
            }
            Some(RequestBody::Multipart { .. }) => {
                // The transport sets the multipart content type, boundary
                // included; inherited overrides would corrupt the form.
                headers.remove("Content-Type");
                headers.remove("Accept");
            }
            None => {}
        }
        if let Some(extra) = extra_headers {
            for (key, value) in extra {
                headers.insert(key, value);
            }
        }

        tracing::debug!(method = %http_method, url = %url, "dispatching request");

        let mut req_builder = match http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &query {
            req_builder = req_builder.query(query);
        }

        match body {
            Some(RequestBody::Json(value)) => {
                req_builder = req_builder.body(value.to_string());
            }
            Some(RequestBody::Multipart { fields, files }) => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                for file in files {
                    let mut part = reqwest::multipart::Part::bytes(file.contents)
                        .file_name(file.file_name);
                    if let Some(mime) = &file.mime_type {
                        part = part.mime_str(mime)?;
                    }
                    form = form.part(file.field_name, part);
                }
                req_builder = req_builder.multipart(form);
            }
            None => {}
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(code, res_headers, body_text))
    }

    /// Parses response headers into a `HashMap`, keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_header_injection() {
        let session = HttpClient::new(&AccessToken::new("test-access-token"));

        assert_eq!(
            session.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_access_token_header_sent_even_when_empty() {
        let session = HttpClient::new(&AccessToken::new(""));

        assert_eq!(
            session.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&String::new())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let session = HttpClient::new(&AccessToken::new("t"));

        assert_eq!(
            session.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let session = HttpClient::new(&AccessToken::new("t"));

        let user_agent = session.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Faire API Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_no_content_type_in_default_headers() {
        // Content-Type is a per-request concern derived from the body.
        let session = HttpClient::new(&AccessToken::new("t"));
        assert!(!session.default_headers().contains_key("Content-Type"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
