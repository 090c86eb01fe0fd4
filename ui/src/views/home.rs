use dioxus::prelude::*;

use crate::catalog::{self, Product};
use crate::components::{app_navbar::product_link, AppNavbar, StarRating};
use crate::core::config::use_page_config;
use crate::core::format::format_price;
use crate::core::rating::filled_stars;
use crate::t;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    tracing::debug!("[i18n] Home render (lang_marker={lang})");
}

/// Catalog index: one card per product, linking to its page.
#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    let listing = match catalog::shared() {
        Ok(catalog) if catalog.products().is_empty() => rsx! {
            p { class: "page-home__empty", {t!("home-empty")} }
        },
        Ok(catalog) => rsx! {
            ul { class: "page-home__products",
                for product in catalog.products().iter() {
                    ProductCard { key: "{product.slug}", product: product.clone() }
                }
            }
        },
        Err(err) => {
            tracing::error!("catalog unavailable: {err}");
            rsx! {
                p { class: "notice notice--error", {t!("catalog-error")} }
            }
        }
    };

    rsx! {
        AppNavbar {}
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }
            {listing}
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let config = use_page_config();
    let price = format_price(product.price, &config.currency_suffix);
    let image_src = product.image_or(&config.placeholder_image).to_string();
    let link = product_link(&product.slug, &t!("home-view-product"));

    rsx! {
        li { class: "card product-card",
            img { class: "product-card__image", src: "{image_src}", alt: "{product.name}" }
            div { class: "product-card__body",
                span { class: "product-hero__category", "{product.category}" }
                h2 { class: "product-card__title", "{product.name}" }
                StarRating { filled: filled_stars(product.rating), compact: true }
                p { "{product.short_description}" }
                div { class: "product-card__footer",
                    span { class: "product-card__price", "{price}" }
                    {link}
                }
            }
        }
    }
}
