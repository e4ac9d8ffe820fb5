//! Core domain types and port definitions for prodcat.
//!
//! This crate holds everything the adapters share: the `Product` domain
//! type, the catalog query pipeline, the port traits implemented by the
//! store and remote crates, and path resolution for local data.
//!
//! No infrastructure dependencies live here - sqlx, reqwest and clap are
//! confined to their adapter crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod query;

// Re-export commonly used types for convenience
pub use domain::{CatalogQuery, CategorySummary, Product, SortMode, summarize_categories};
pub use ports::{CatalogSource, CatalogStore, SourceError, StoreError};
pub use query::{filter_by_category, run_query, search, sort_products};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};
