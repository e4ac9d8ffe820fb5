//! Wire types for the product listing API.
//!
//! These mirror the external JSON schema exactly and never leave this
//! crate - the port implementation maps them into domain products.

use serde::Deserialize;

/// Response body of the listing endpoint.
///
/// The endpoint also echoes `skip` and `limit`; we never page past the
/// first request, so only the payload and the server-side total are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListing {
    /// The listed products.
    pub products: Vec<ListedProduct>,
    /// Total number of products available on the server.
    #[serde(default)]
    pub total: u32,
}

/// One product as the listing API describes it.
///
/// The external schema has `title` where our domain has `name`, and no
/// date field at all. Unknown fields (thumbnails, ratings, stock...) are
/// ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedProduct {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}
