//! `SQLite`-backed snapshot store for prodcat.
//!
//! The catalog snapshot is a single JSON blob under one key in a key-value
//! table - the whole product list is written and replaced wholesale, never
//! patched. The `SqlitePool` is confined to this crate and never exposed
//! through the port trait signatures.

#![deny(unsafe_code)]

mod setup;
mod sqlite_catalog_store;

pub use setup::setup_database;
pub use sqlite_catalog_store::SqliteCatalogStore;
