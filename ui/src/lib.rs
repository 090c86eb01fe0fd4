//! Shared UI crate for Affilio. Product data, localization and page components live here.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod buy_button;
    mod faq_accordion;
    mod star_rating;
    mod sticky_buy;
    mod trust_badges;

    pub use buy_button::{BuyButton, BuyPlacement};
    pub use faq_accordion::FaqAccordion;
    pub use star_rating::StarRating;
    pub use sticky_buy::{StickyBuyButton, StickySide};
    pub use trust_badges::TrustBadges;
}
