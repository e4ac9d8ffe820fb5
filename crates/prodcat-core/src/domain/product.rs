//! Product domain types.
//!
//! These types represent catalog items in the system, independent of any
//! infrastructure concerns (database, network, etc.).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once stored - the snapshot they live in is only
/// ever replaced wholesale, never patched item by item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the remote listing source.
    pub id: i64,
    /// Human-readable product name.
    pub name: String,
    /// Category label from an open external vocabulary.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Price, non-negative.
    pub price: f64,
    /// Date the product entered the catalog, serialized as `YYYY-MM-DD`.
    ///
    /// The remote source carries no creation date, so the fetcher stamps
    /// every item with the calendar date of the fetch. All items fetched
    /// in one run therefore share this value.
    pub date: NaiveDate,
}

/// Aggregate data about one category in a snapshot.
///
/// Used by adapters to build category selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The category label.
    pub category: String,
    /// Number of products carrying this label.
    pub count: usize,
}

/// Collect distinct categories with product counts, sorted by label.
pub fn summarize_categories(products: &[Product]) -> Vec<CategorySummary> {
    let mut counts: std::collections::BTreeMap<&str, usize> = std::collections::BTreeMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategorySummary {
            category: category.to_string(),
            count,
        })
        .collect()
}
