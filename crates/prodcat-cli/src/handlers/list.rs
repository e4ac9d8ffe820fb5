//! List command handler - the controller path.
//!
//! Reads whatever the store holds, runs the query pipeline with the
//! selections from the CLI flags, and renders the result. When nothing is
//! cached the fetch affordance is shown instead.

use std::sync::Arc;

use prodcat_core::{CatalogQuery, CatalogStore, Product, query::run_query};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_cards;
use crate::state::{CatalogState, load_state};

/// Outcome of a list invocation.
#[derive(Debug, PartialEq)]
pub enum ListOutcome {
    /// Nothing cached - offer the fetch trigger.
    Empty,
    /// The pipeline result, in render order.
    Products(Vec<Product>),
}

/// Load the snapshot and run the query pipeline over it.
pub async fn run_list(
    store: &Arc<dyn CatalogStore>,
    query: &CatalogQuery,
) -> Result<ListOutcome, CliError> {
    match load_state(store).await? {
        CatalogState::Empty => Ok(ListOutcome::Empty),
        CatalogState::Populated(products) => {
            Ok(ListOutcome::Products(run_query(&products, query)))
        }
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, query: &CatalogQuery) -> Result<(), CliError> {
    match run_list(ctx.store(), query).await? {
        ListOutcome::Empty => {
            println!("No catalog cached yet.");
            println!("Run 'prodcat fetch' to load products from the remote catalog.");
        }
        ListOutcome::Products(products) => {
            if products.is_empty() {
                println!("No products match the current filters.");
            } else {
                render_cards(&products);
                println!("{} product(s).", products.len());
            }
        }
    }
    Ok(())
}
