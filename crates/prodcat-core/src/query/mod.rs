//! The catalog query pipeline.
//!
//! Three composable pure stages applied strictly in order: category filter,
//! then text search, then sort. The order only matters for performance
//! (filtering first shrinks the sort input); each stage is a total function
//! over its input, so the result is the same under any order.
//!
//! Every stage returns a new `Vec` and never mutates its input, so repeated
//! invocations from rapid user input cannot corrupt an in-flight result.
//! None of this needs an async construct - the only real I/O boundary in
//! the system is the network fetch, which lives in the remote adapter.

use tracing::trace;

use crate::domain::{CatalogQuery, Product, SortMode};

/// Keep only products whose category equals the selection.
///
/// An empty/absent selection is the identity: the input comes back with the
/// same elements in the same order. Matching is exact and case-sensitive -
/// the category vocabulary is controlled by the remote source, not by us.
#[must_use]
pub fn filter_by_category(products: &[Product], category: Option<&str>) -> Vec<Product> {
    match category {
        None | Some("") => products.to_vec(),
        Some(selection) => products
            .iter()
            .filter(|p| p.category == selection)
            .cloned()
            .collect(),
    }
}

/// Keep only products whose name or description contains the search term.
///
/// An empty/absent term is the identity. Matching is a case-insensitive
/// substring test - no tokenization, no fuzzing.
#[must_use]
pub fn search(products: &[Product], term: Option<&str>) -> Vec<Product> {
    match term {
        None | Some("") => products.to_vec(),
        Some(term) => {
            let needle = term.to_lowercase();
            products
                .iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        }
    }
}

/// Sort products by the given mode, or leave them in input order.
///
/// The sort is stable: ties keep their relative order from the input. This
/// matters in practice because every item fetched in one run shares the
/// same synthetic date, so date sorts are frequently all-ties.
#[must_use]
pub fn sort_products(products: &[Product], mode: Option<SortMode>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match mode {
        None => {}
        Some(SortMode::PriceAsc) => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some(SortMode::PriceDesc) => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        Some(SortMode::DateAsc) => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        Some(SortMode::DateDesc) => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    sorted
}

/// Run the full pipeline for one query: category filter, search, sort.
#[must_use]
pub fn run_query(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let filtered = filter_by_category(products, query.category.as_deref());
    let searched = search(&filtered, query.search.as_deref());
    let result = sort_products(&searched, query.sort);

    trace!(
        input = products.len(),
        output = result.len(),
        category = ?query.category,
        search = ?query.search,
        sort = ?query.sort,
        "query pipeline run"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: i64, name: &str, category: &str, price: f64, day: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: format!("{name} description"),
            price,
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Amber Lamp", "lighting", 10.0, 2),
            product(2, "Birch Table", "furniture", 5.0, 1),
            product(3, "Cedar Chair", "furniture", 5.0, 3),
            product(4, "Brass Lamp", "lighting", 7.5, 1),
        ]
    }

    #[test]
    fn test_category_filter_exact_match() {
        let out = filter_by_category(&fixture(), Some("furniture"));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let out = filter_by_category(&fixture(), Some("Furniture"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_category_filter_empty_selection_is_identity() {
        let input = fixture();
        assert_eq!(filter_by_category(&input, None), input);
        assert_eq!(filter_by_category(&input, Some("")), input);
    }

    #[test]
    fn test_category_filter_is_idempotent() {
        let once = filter_by_category(&fixture(), Some("lighting"));
        let twice = filter_by_category(&once, Some("lighting"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let out = search(&fixture(), Some("amber"));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        // Descriptions are "<name> description", so "table desc" only
        // matches product 2.
        let out = search(&fixture(), Some("Table desc"));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_search_is_substring_not_tokenized() {
        let out = search(&fixture(), Some("irch"));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_search_empty_term_is_identity() {
        let input = fixture();
        assert_eq!(search(&input, None), input);
        assert_eq!(search(&input, Some("")), input);
    }

    #[test]
    fn test_sort_price_ascending() {
        let out = sort_products(&fixture(), Some(SortMode::PriceAsc));
        assert_eq!(
            out.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 4, 1]
        );
    }

    #[test]
    fn test_sort_price_descending() {
        let out = sort_products(&fixture(), Some(SortMode::PriceDesc));
        assert_eq!(
            out.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 4, 2, 3]
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_prices() {
        // Products 2 and 3 share price 5.0; input order must survive.
        let out = sort_products(&fixture(), Some(SortMode::PriceAsc));
        let ids: Vec<i64> = out.iter().map(|p| p.id).collect();
        let pos2 = ids.iter().position(|&id| id == 2).unwrap();
        let pos3 = ids.iter().position(|&id| id == 3).unwrap();
        assert!(pos2 < pos3);
    }

    #[test]
    fn test_sort_is_stable_on_all_tie_dates() {
        // Everything stamped with one fetch date - the common case.
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let input: Vec<Product> = fixture()
            .into_iter()
            .map(|mut p| {
                p.date = date;
                p
            })
            .collect();

        let out = sort_products(&input, Some(SortMode::DateDesc));
        assert_eq!(out, input);
    }

    #[test]
    fn test_sort_date_ascending() {
        let out = sort_products(&fixture(), Some(SortMode::DateAsc));
        assert_eq!(
            out.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 4, 1, 3]
        );
    }

    #[test]
    fn test_sort_none_keeps_filtered_order() {
        let input = fixture();
        assert_eq!(sort_products(&input, None), input);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = fixture();
        let _ = sort_products(&input, Some(SortMode::PriceAsc));
        assert_eq!(input, fixture());
    }

    #[test]
    fn test_run_query_applies_all_stages_in_order() {
        let query = CatalogQuery {
            category: Some("furniture".to_string()),
            search: Some("c".to_string()),
            sort: Some(SortMode::PriceDesc),
        };

        // Both furniture items contain "c" (description), equal price:
        // stable sort keeps input order.
        let out = run_query(&fixture(), &query);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_run_query_unfiltered_is_identity() {
        let input = fixture();
        assert_eq!(run_query(&input, &CatalogQuery::unfiltered()), input);
    }

    #[test]
    fn test_run_query_on_empty_store() {
        let out = run_query(
            &[],
            &CatalogQuery {
                category: Some("x".to_string()),
                search: Some("y".to_string()),
                sort: Some(SortMode::PriceAsc),
            },
        );
        assert!(out.is_empty());
    }
}
