//! The affiliate product page.
//!
//! [`ProductPage`] is a function of the product and the translator only; it owns no state
//! besides the FAQ expand flags. Section order is fixed: navbar, sticky buy buttons, hero,
//! description, features, benefits, mid-page call to action, testimonials, FAQ, final call to
//! action, footer. Empty lists keep their heading and render no items.

use dioxus::prelude::*;

use crate::catalog::{self, Product};
use crate::components::{
    AppNavbar, BuyButton, BuyPlacement, FaqAccordion, StarRating, StickyBuyButton, StickySide,
    TrustBadges,
};
use crate::core::config::use_page_config;
use crate::core::format::{format_price, format_rating};
use crate::core::rating::{filled_stars, filled_stars_whole};
use crate::i18n::Translator;
use crate::t;

#[component]
pub fn ProductPage(product: Product, #[props(default)] translate: Translator) -> Element {
    let config = use_page_config();

    let price = format_price(product.price, &config.currency_suffix);
    let buy = translate.tr("buy");
    let days = config.guarantee_days.to_string();
    let image_src = product.image_or(&config.placeholder_image).to_string();

    let reviews_label = translate.tr_with(
        "hero-reviews",
        &[
            ("rating", format_rating(product.rating)),
            ("count", product.reviews.to_string()),
        ],
    );
    let guarantee = translate.tr_with("trust-guarantee", &[("days", days.clone())]);
    let hero_badges = vec![
        translate.tr_with(
            "trust-secure-provider",
            &[("provider", config.payment_provider.clone())],
        ),
        guarantee.clone(),
        translate.tr("trust-instant-access"),
    ];
    let final_badges = vec![
        translate.tr("trust-instant-after-payment"),
        guarantee,
        translate.tr("trust-secure"),
    ];
    let mid_cta_label = translate.tr_with(
        "buy-with-price",
        &[("buy", buy.clone()), ("price", price.clone())],
    );

    #[cfg(debug_assertions)]
    {
        tracing::debug!(slug = %product.slug, "product page render");
    }

    rsx! {
        div { class: "page page-product",
            AppNavbar {}

            StickyBuyButton {
                hoplink: product.hoplink.clone(),
                price: price.clone(),
                product_name: product.name.clone(),
                label: buy.clone(),
                side: StickySide::Left,
            }
            StickyBuyButton {
                hoplink: product.hoplink.clone(),
                price: price.clone(),
                product_name: product.name.clone(),
                label: buy.clone(),
                side: StickySide::Right,
            }

            div { class: "page-product__spacer" }

            section { class: "product-hero",
                div { class: "product-hero__inner",
                    div { class: "product-hero__media",
                        img {
                            class: "product-hero__image",
                            src: "{image_src}",
                            alt: "{product.name}",
                        }
                    }
                    div { class: "product-hero__body",
                        span { class: "product-hero__category", "{product.category}" }
                        h1 { class: "product-hero__title", "{product.name}" }
                        div { class: "product-hero__rating",
                            StarRating { filled: filled_stars(product.rating) }
                            span { class: "product-hero__reviews", "{reviews_label}" }
                        }
                        p { class: "product-hero__summary", "{product.short_description}" }
                        div { class: "product-hero__price",
                            span { class: "product-hero__amount", "{price}" }
                            span { class: "product-hero__note", {translate.tr("hero-one-time-payment")} }
                        }
                        BuyButton {
                            hoplink: product.hoplink.clone(),
                            placement: BuyPlacement::Hero,
                            class: "button button--accent button--lg",
                            "{buy}"
                        }
                        TrustBadges { items: hero_badges }
                    }
                }
            }

            div { class: "page-product__content",
                section { class: "product-section product-description",
                    h2 { {translate.tr("description")} }
                    p { "{product.long_description}" }
                }

                section { class: "product-section product-features",
                    h2 { {translate.tr("features-heading")} }
                    div { class: "card",
                        ul { class: "product-features__list",
                            for (index, feature) in product.features.iter().enumerate() {
                                li { key: "{index}", class: "product-features__item",
                                    span { class: "check", aria_hidden: "true", "✓" }
                                    span { "{feature}" }
                                }
                            }
                        }
                    }
                }

                section { class: "product-section product-benefits",
                    h2 { {translate.tr("benefits")} }
                    div { class: "product-benefits__list",
                        for (index, benefit) in product.benefits.iter().enumerate() {
                            div { key: "{index}", class: "card product-benefits__card",
                                span { class: "check check--solid", aria_hidden: "true", "✓" }
                                p { "{benefit}" }
                            }
                        }
                    }
                }

                section { class: "product-section product-cta product-cta--mid",
                    div { class: "card card--accent",
                        h3 { {translate.tr("mid-cta-title")} }
                        p { {translate.tr("mid-cta-subtitle")} }
                        BuyButton {
                            hoplink: product.hoplink.clone(),
                            placement: BuyPlacement::MidCta,
                            class: "button button--accent button--lg",
                            "{mid_cta_label}"
                        }
                        p { class: "product-cta__note",
                            {translate.tr_with("mid-cta-guarantee", &[("days", days.clone())])}
                        }
                    }
                }

                section { class: "product-section product-testimonials",
                    h2 { {translate.tr("testimonials")} }
                    div { class: "product-testimonials__list",
                        for (index, testimonial) in product.testimonials.iter().enumerate() {
                            div { key: "{index}", class: "card testimonial-card",
                                StarRating { filled: filled_stars_whole(testimonial.rating), compact: true }
                                p { class: "testimonial-card__quote", "“{testimonial.content}”" }
                                div { class: "testimonial-card__author",
                                    p { class: "testimonial-card__name", "{testimonial.name}" }
                                    p { class: "testimonial-card__role", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }

                section { class: "product-section product-faq",
                    h2 { {translate.tr("faq")} }
                    FaqAccordion { entries: product.faq.clone() }
                }

                section { class: "product-section product-cta product-cta--final",
                    div { class: "card card--outlined",
                        h3 { {translate.tr("final-cta-title")} }
                        p { {translate.tr("final-cta-subtitle")} }
                        div { class: "product-cta__price", "{price}" }
                        BuyButton {
                            hoplink: product.hoplink.clone(),
                            placement: BuyPlacement::FinalCta,
                            class: "button button--accent button--xl",
                            "{buy}"
                        }
                        TrustBadges { items: final_badges }
                    }
                }
            }

            footer { class: "site-footer",
                p { {translate.tr("copyright")} }
            }
        }
    }
}

/// Route target: looks `slug` up in the embedded catalog.
#[component]
pub fn ProductView(slug: String) -> Element {
    // Subscribe to the global language code so a locale switch re-renders the page.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let body = match catalog::shared() {
        Ok(catalog) => match catalog.get(&slug) {
            Some(product) => rsx! {
                ProductPage { product: product.clone() }
            },
            None => {
                tracing::info!(%slug, "unknown product slug");
                rsx! { ProductNotFound {} }
            }
        },
        Err(err) => {
            tracing::error!("catalog unavailable: {err}");
            rsx! { CatalogUnavailable {} }
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        {body}
    }
}

#[component]
pub fn ProductNotFound() -> Element {
    rsx! {
        AppNavbar {}
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
        }
    }
}

#[component]
pub fn CatalogUnavailable() -> Element {
    rsx! {
        AppNavbar {}
        section { class: "page page-not-found",
            p { class: "notice notice--error", {t!("catalog-error")} }
        }
    }
}
