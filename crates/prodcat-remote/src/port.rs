//! Port trait implementation for `CatalogClient`.
//!
//! Implements the core-owned `CatalogSource` trait, handling the mapping
//! between wire types and domain products and between internal errors and
//! port errors.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use prodcat_core::{CatalogSource, Product, SourceError};

use crate::client::CatalogClient;
use crate::error::RemoteError;
use crate::http::HttpBackend;
use crate::models::ListedProduct;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `RemoteError` to core `SourceError`.
fn map_error(err: RemoteError) -> SourceError {
    match err {
        RemoteError::RequestFailed { status, url } => {
            if status == 429 {
                SourceError::RateLimited
            } else {
                SourceError::Network {
                    message: format!("request failed with status {status}: {url}"),
                }
            }
        }
        RemoteError::Network(e) => SourceError::Network {
            message: e.to_string(),
        },
        RemoteError::InvalidUrl(e) => SourceError::Network {
            message: e.to_string(),
        },
        RemoteError::InvalidResponse { message } => SourceError::InvalidResponse { message },
        RemoteError::JsonParse(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversion
// ============================================================================

/// Map one listed item into a domain product.
///
/// The listing schema has no per-item date, so every product is stamped
/// with the given fetch date. All items mapped in one run therefore share
/// it, which makes date sorts mostly ties downstream - deliberate.
fn to_product(item: ListedProduct, fetch_date: chrono::NaiveDate) -> Product {
    Product {
        id: item.id,
        name: item.title,
        category: item.category,
        description: item.description,
        price: item.price,
        date: fetch_date,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogSource for CatalogClient<B> {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, SourceError> {
        let listing = self.fetch_listing().await.map_err(map_error)?;
        let available = listing.total;
        let fetch_date = Utc::now().date_naive();

        let products: Vec<Product> = listing
            .products
            .into_iter()
            .map(|item| to_product(item, fetch_date))
            .collect();

        info!(
            count = products.len(),
            available,
            %fetch_date,
            "fetched product catalog"
        );
        Ok(products)
    }
}
