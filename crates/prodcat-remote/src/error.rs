//! Internal error types for remote catalog operations.
//!
//! These errors are internal to `prodcat-remote` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for remote catalog operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors related to the remote listing API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// API request failed with an HTTP error status.
    #[error("Listing API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from listing API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
