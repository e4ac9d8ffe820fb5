//! Port traits implemented by the infrastructure crates.
//!
//! The store and remote adapters depend on this crate and implement these
//! traits; the CLI composition root wires concrete implementations in and
//! hands trait objects to the handlers. Handlers never see sqlx or reqwest.

mod catalog_source;
mod catalog_store;

pub use catalog_source::{CatalogSource, SourceError};
pub use catalog_store::{CatalogStore, StoreError};
