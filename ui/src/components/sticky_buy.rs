use dioxus::prelude::*;

use super::buy_button::{BuyButton, BuyPlacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickySide {
    Left,
    Right,
}

/// Buy affordance pinned to one side of the viewport while the page scrolls.
#[component]
pub fn StickyBuyButton(
    hoplink: String,
    price: String,
    product_name: String,
    label: String,
    side: StickySide,
) -> Element {
    let (placement, class) = match side {
        StickySide::Left => (BuyPlacement::StickyLeft, "sticky-buy sticky-buy--left"),
        StickySide::Right => (BuyPlacement::StickyRight, "sticky-buy sticky-buy--right"),
    };

    rsx! {
        aside { class: "{class}",
            span { class: "sticky-buy__name", "{product_name}" }
            span { class: "sticky-buy__price", "{price}" }
            BuyButton {
                hoplink: hoplink,
                placement: placement,
                class: "button button--accent sticky-buy__button",
                "{label}"
            }
        }
    }
}
