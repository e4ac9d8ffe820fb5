//! Output formatting for the CLI.

mod cards;

pub use cards::{format_price, render_cards, truncate_string};
