//! HTTP client functionality for the Faire API.
//!
//! This module provides the transport layer shared by every resource pool:
//!
//! - [`HttpClient`]: The authenticated session
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: Request construction
//! - [`HttpResponse`]: The raw response envelope
//! - [`HttpError`] and friends: HTTP-level error types

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError, RequestFailedError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, CLIENT_VERSION};
pub use http_request::{FileAttachment, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
