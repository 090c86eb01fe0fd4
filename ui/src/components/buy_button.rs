use dioxus::prelude::*;

use crate::core::outbound::{initiate_purchase, use_opener};

/// Where a buy control sits on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyPlacement {
    StickyLeft,
    StickyRight,
    Hero,
    MidCta,
    FinalCta,
}

impl BuyPlacement {
    /// Every buy control a product page renders, top to bottom.
    pub const ALL: [Self; 5] = [
        Self::StickyLeft,
        Self::StickyRight,
        Self::Hero,
        Self::MidCta,
        Self::FinalCta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StickyLeft => "sticky-left",
            Self::StickyRight => "sticky-right",
            Self::Hero => "hero",
            Self::MidCta => "mid-cta",
            Self::FinalCta => "final-cta",
        }
    }
}

/// Buy-labeled control. Every placement triggers the same purchase action on `hoplink`.
#[component]
pub fn BuyButton(
    hoplink: String,
    placement: BuyPlacement,
    #[props(into, default = "button button--accent".to_string())] class: String,
    children: Element,
) -> Element {
    let opener = use_opener();

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-buy-placement": placement.as_str(),
            onclick: move |_| initiate_purchase(&opener, &hoplink),
            {children}
            span { class: "button__icon", aria_hidden: "true", "↗" }
        }
    }
}
