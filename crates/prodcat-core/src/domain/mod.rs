//! Domain types for the product catalog.

mod product;
mod query;

pub use product::{CategorySummary, Product, summarize_categories};
pub use query::{CatalogQuery, SortMode};
