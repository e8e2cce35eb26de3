//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations: request validation
//! failures, network errors, and the opt-in typed wrapper for non-successful
//! responses.
//!
//! # Error Handling
//!
//! Capability calls surface the platform's response unmodified: a non-2xx
//! status is returned as an `Ok(HttpResponse)` that the caller inspects.
//! [`RequestFailedError`] only appears when the caller opts in via
//! [`crate::HttpResponse::error_for_status`].
//!
//! # Example
//!
//! ```rust,ignore
//! use faire_api::HttpError;
//!
//! match pool.fetch_list(None).await {
//!     Ok(response) => println!("status {}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("bad request: {e}"),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//!     Err(HttpError::Failed(e)) => println!("failed with {}", e.code),
//! }
//! ```

use thiserror::Error;

/// Error representing a non-successful HTTP response.
///
/// Produced by [`crate::HttpResponse::error_for_status`] when the status code
/// is outside the 2xx range. The raw response body is carried verbatim so no
/// information from the platform is lost.
///
/// # Example
///
/// ```rust
/// use faire_api::RequestFailedError;
///
/// let error = RequestFailedError {
///     code: 404,
///     body: r#"{"message":"order not found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {body}")]
pub struct RequestFailedError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT, or PATCH request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-successful HTTP response, converted via
    /// [`crate::HttpResponse::error_for_status`].
    #[error(transparent)]
    Failed(#[from] RequestFailedError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message_includes_status_and_body() {
        let error = RequestFailedError {
            code: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying a body."
        );
    }

    #[test]
    fn test_http_error_wraps_transparently() {
        let error = HttpError::Failed(RequestFailedError {
            code: 500,
            body: "oops".to_string(),
        });
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let failed: &dyn std::error::Error = &RequestFailedError {
            code: 400,
            body: "test".to_string(),
        };
        let _ = failed;

        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        let _ = invalid;
    }
}
