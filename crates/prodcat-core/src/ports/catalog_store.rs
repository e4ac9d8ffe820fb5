//! Catalog store port definition.
//!
//! The store holds at most one snapshot: the full product list, serialized
//! as a single JSON blob under one key. There is no partial update
//! operation - `save` replaces the snapshot wholesale.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Product;

/// Errors that can occur in snapshot store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted snapshot exists but cannot be deserialized.
    ///
    /// Kept distinct from absence so callers can report corruption instead
    /// of silently treating it as an empty catalog.
    #[error("Stored catalog snapshot is corrupt: {0}")]
    Corrupt(String),

    /// Underlying storage failure (connection, query, serialization).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for catalog snapshot persistence.
///
/// Implementations handle the actual storage mechanism; the reference
/// implementation lives in `prodcat-store` on top of `SQLite`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has ever been saved. A snapshot
    /// that exists but fails to deserialize is reported as
    /// [`StoreError::Corrupt`].
    async fn load(&self) -> Result<Option<Vec<Product>>, StoreError>;

    /// Serialize and persist the full product list, replacing any prior
    /// snapshot.
    async fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}
