//! `SQLite` implementation of the `CatalogStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use prodcat_core::{CatalogStore, Product, StoreError};

const SNAPSHOT_KEY: &str = "catalog";

/// `SQLite` implementation of the `CatalogStore` trait.
///
/// Stores the whole catalog snapshot as a JSON blob in a key-value table.
/// A malformed blob is reported as [`StoreError::Corrupt`] rather than
/// being silently coerced to an empty catalog - callers decide how loudly
/// to surface that.
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Create a new `SQLite` catalog store over an initialized pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn load(&self) -> Result<Option<Vec<Product>>, StoreError> {
        let row = sqlx::query("SELECT value FROM catalog_kv WHERE key = ?")
            .bind(SNAPSHOT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        match row {
            Some(r) => {
                let json: String = r.get("value");
                let products: Vec<Product> = serde_json::from_str(&json)
                    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
                debug!(count = products.len(), "loaded catalog snapshot");
                Ok(Some(products))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(products).map_err(|e| StoreError::Storage(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query("INSERT OR REPLACE INTO catalog_kv (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(SNAPSHOT_KEY)
            .bind(&json)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        debug!(count = products.len(), "saved catalog snapshot");
        Ok(())
    }
}
