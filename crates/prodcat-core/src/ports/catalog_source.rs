//! Remote catalog source port definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Product;

/// Errors surfaced by a remote catalog source.
///
/// These are the adapter-neutral shapes; the remote crate maps its internal
/// HTTP errors into them at the port boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection failure, timeout, or non-success HTTP status.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The source answered but the body was not the expected shape.
    #[error("Invalid response from catalog source: {message}")]
    InvalidResponse { message: String },

    /// The source is throttling us.
    #[error("Rate limited by catalog source")]
    RateLimited,
}

/// Port for fetching the product catalog from a remote listing source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog and map it into domain products.
    ///
    /// Each returned product carries the calendar date of this fetch, since
    /// the remote schema has no per-item date.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, SourceError>;
}
