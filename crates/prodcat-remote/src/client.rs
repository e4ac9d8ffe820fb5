//! Client for the remote product listing API.

use url::Url;

use crate::config::RemoteConfig;
use crate::error::RemoteResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ProductListing;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the product listing API.
///
/// Generic over an HTTP backend for easy testing. Use
/// [`DefaultCatalogClient`] in production code and interact with it
/// through the core `CatalogSource` trait.
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: RemoteConfig,
}

impl DefaultCatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RemoteConfig) -> RemoteResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: RemoteConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Build the listing URL with the configured limit and zero offset.
    pub(crate) fn listing_url(&self) -> RemoteResult<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.query_pairs_mut()
            .append_pair("limit", &self.config.limit.to_string())
            .append_pair("skip", "0");
        Ok(url)
    }

    /// Fetch one page of the product listing.
    ///
    /// The catalog is capped at the configured limit; there is no paging
    /// beyond the first page.
    pub(crate) async fn fetch_listing(&self) -> RemoteResult<ProductListing> {
        let url = self.listing_url()?;
        self.backend.get_json(&url).await
    }
}
