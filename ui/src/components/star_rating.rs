use dioxus::prelude::*;

use crate::core::rating::{star_row, STAR_COUNT};

/// A row of exactly five star indicators, the first `filled` of them highlighted.
#[component]
pub fn StarRating(filled: usize, #[props(default)] compact: bool) -> Element {
    let row = star_row(filled);
    let filled = filled.min(STAR_COUNT);
    let class = if compact { "stars stars--compact" } else { "stars" };

    rsx! {
        span { class: "{class}", role: "img", aria_label: "{filled}/{STAR_COUNT}",
            for (index, on) in row.iter().enumerate() {
                span { key: "{index}", class: star_class(*on), aria_hidden: "true", "★" }
            }
        }
    }
}

fn star_class(filled: bool) -> &'static str {
    if filled {
        "star star--filled"
    } else {
        "star star--empty"
    }
}
