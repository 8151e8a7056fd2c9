//! Error types for the ads API client.
//!
//! # Design
//! 404 and 400 get dedicated variants: the suite asserts on both as expected
//! outcomes. A 400 carries the service's `result.message` when the body has
//! one. Every other unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `AdsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the item or seller has nothing to show.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request with 400.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Any other status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
