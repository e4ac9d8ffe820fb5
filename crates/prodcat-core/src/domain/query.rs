//! Query selection state.
//!
//! A [`CatalogQuery`] captures the user's current filter, search and sort
//! selections. Adapters build one fresh from their controls on every
//! invocation - there is no cached copy anywhere.

use serde::{Deserialize, Serialize};

/// How to order a filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Oldest first.
    DateAsc,
    /// Newest first.
    DateDesc,
}

impl SortMode {
    /// Parse a sort mode from its wire/CLI spelling.
    ///
    /// Returns `None` for unknown spellings.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "date-asc" => Some(Self::DateAsc),
            "date-desc" => Some(Self::DateDesc),
            _ => None,
        }
    }

    /// The canonical spelling, matching what [`parse`](Self::parse) accepts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current filter/search/sort selections for one pipeline run.
///
/// `None` fields mean "no filter" / "leave in filtered order".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Exact, case-sensitive category filter.
    pub category: Option<String>,
    /// Case-insensitive substring search over name and description.
    pub search: Option<String>,
    /// Sort order applied after filtering.
    pub sort: Option<SortMode>,
}

impl CatalogQuery {
    /// A query with no filters and no sort - the identity pipeline.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }
}
