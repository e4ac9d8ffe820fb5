//! Product card rendering.
//!
//! A full redraw on every call: one card per product, in the order given.
//! No incremental diffing - acceptable because the catalog is capped at
//! the fetch limit.

use prodcat_core::Product;

/// Render products as cards to stdout.
///
/// Each card shows name, description, formatted price and the catalog
/// date in day-first notation.
pub fn render_cards(products: &[Product]) {
    for product in products {
        println!("{}", product.name);
        println!("  {}", truncate_string(&product.description, 72));
        println!("  Price: {}", format_price(product.price));
        println!("  Added: {}", product.date.format("%d.%m.%Y"));
        println!();
    }
}

/// Format a price with two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Truncates a string to a maximum length in bytes, adding "..." if needed.
///
/// The cut is moved back to the nearest char boundary so multi-byte
/// text never splits mid-character.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut cut = max_len.saturating_sub(3);
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &s[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(0.5), "0.50");
    }

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
    }

    #[test]
    fn test_truncate_string_needs_truncation() {
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_string_cuts_multibyte_on_char_boundary() {
        // Cyrillic chars are two bytes, so byte 69 lands mid-character
        let long = "й".repeat(80);
        let truncated = truncate_string(&long, 72);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 72);
        assert!(truncated.trim_end_matches("...").chars().all(|c| c == 'й'));
    }

    #[test]
    fn test_truncate_string_multibyte_within_limit_untouched() {
        let s = "Ковдра з наповнювачем";
        assert_eq!(truncate_string(s, 72), s);
    }
}
