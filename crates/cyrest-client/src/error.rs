//! CyREST client errors

use thiserror::Error;

/// Errors that can occur when talking to the CyREST API
#[derive(Debug, Error)]
pub enum CyRestError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Precondition failed (412), e.g. a payload the service could not process
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Server-side failure (5xx), carrying the response body text
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    /// Any other non-success status
    #[error("CyREST API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded as JSON
    #[error("decode error: {0}")]
    Decode(String),

    /// JSON serialization error while building a request body
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request rejected client-side before any network call
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
