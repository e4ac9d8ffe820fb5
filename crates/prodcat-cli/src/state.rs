//! Startup catalog state.
//!
//! Two states are reachable when the tool starts: either no snapshot has
//! ever been fetched (the fetch affordance is offered) or a snapshot
//! exists (it is rendered immediately). The only transition from Empty to
//! Populated is a successful fetch; nothing transitions back.

use std::sync::Arc;
use tracing::warn;

use prodcat_core::{CatalogStore, Product, StoreError};

use crate::error::CliError;

/// What the snapshot store currently holds.
#[derive(Debug, PartialEq)]
pub enum CatalogState {
    /// No snapshot has been fetched yet.
    Empty,
    /// A snapshot exists.
    Populated(Vec<Product>),
}

impl CatalogState {
    /// The products to feed into the query pipeline - empty when nothing
    /// is cached.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Empty => &[],
            Self::Populated(products) => products,
        }
    }
}

/// Load the catalog state from the store.
///
/// A corrupt snapshot is reported at WARN and then treated as empty: the
/// user sees the same "nothing cached yet" behavior as a fresh install,
/// but the condition is observable in the logs instead of being silently
/// swallowed. Other storage failures propagate.
pub async fn load_state(store: &Arc<dyn CatalogStore>) -> Result<CatalogState, CliError> {
    match store.load().await {
        Ok(Some(products)) => Ok(CatalogState::Populated(products)),
        Ok(None) => Ok(CatalogState::Empty),
        Err(StoreError::Corrupt(reason)) => {
            warn!(%reason, "stored catalog snapshot is corrupt, treating as empty");
            Ok(CatalogState::Empty)
        }
        Err(e) => Err(e.into()),
    }
}
