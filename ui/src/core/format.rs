//! Formatting helpers for presenting prices and scores.

/// Price followed by its currency suffix, e.g. `49€` or `47.5€`.
///
/// Whole amounts print without decimals.
pub fn format_price(price: f64, suffix: &str) -> String {
    format!("{price}{suffix}")
}

/// Headline score as typed in the catalog, e.g. `4.8` or `5`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating}")
}
