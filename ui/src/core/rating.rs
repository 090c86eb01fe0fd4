//! Star rating thresholds.
//!
//! Every rating widget renders exactly [`STAR_COUNT`] indicators. A headline score such as
//! `4.7` fills `floor(4.7) = 4` of them; a testimonial's whole-number score fills that many.
//!
//! Out-of-range scores are clamped: anything below zero (and NaN) fills nothing, anything
//! above five fills all five. The row length never changes.

/// Number of indicators in every rating row.
pub const STAR_COUNT: usize = 5;

/// Filled indicators for a fractional product score.
pub fn filled_stars(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.floor().clamp(0.0, STAR_COUNT as f64) as usize
}

/// Filled indicators for a whole-number testimonial score.
pub fn filled_stars_whole(rating: u32) -> usize {
    usize::try_from(rating).map_or(STAR_COUNT, |r| r.min(STAR_COUNT))
}

/// Fill pattern for a row: `true` for a filled indicator, left to right.
pub fn star_row(filled: usize) -> [bool; STAR_COUNT] {
    std::array::from_fn(|i| i < filled)
}
