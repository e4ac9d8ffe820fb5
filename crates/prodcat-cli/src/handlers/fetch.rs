//! Fetch command handler - the fetch trigger.
//!
//! Fetches the catalog from the remote source, replaces the snapshot, and
//! renders the result. On failure nothing is written and the error is
//! surfaced to the user instead of being logged away.

use std::sync::Arc;

use prodcat_core::{CatalogSource, CatalogStore, Product};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_cards;
use crate::state::{CatalogState, load_state};

/// Outcome of a fetch attempt.
#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    /// The snapshot was written with these products.
    Fetched(Vec<Product>),
    /// A snapshot already exists and `--force` was not given.
    AlreadyPopulated(usize),
}

/// Run the fetch: check current state, call the source, save the snapshot.
///
/// The store is only written after a fully successful fetch - a failed
/// call leaves whatever was cached untouched.
pub async fn run_fetch(
    store: &Arc<dyn CatalogStore>,
    source: &Arc<dyn CatalogSource>,
    force: bool,
) -> Result<FetchOutcome, CliError> {
    if !force {
        if let CatalogState::Populated(existing) = load_state(store).await? {
            return Ok(FetchOutcome::AlreadyPopulated(existing.len()));
        }
    }

    let products = source.fetch_catalog().await?;
    store.save(&products).await?;
    Ok(FetchOutcome::Fetched(products))
}

/// Execute the fetch command.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<(), CliError> {
    match run_fetch(ctx.store(), ctx.source(), force).await? {
        FetchOutcome::Fetched(products) => {
            println!("Fetched {} product(s).\n", products.len());
            render_cards(&products);
        }
        FetchOutcome::AlreadyPopulated(count) => {
            println!("Catalog already holds {count} product(s).");
            println!("Use 'prodcat fetch --force' to replace the snapshot.");
        }
    }
    Ok(())
}
