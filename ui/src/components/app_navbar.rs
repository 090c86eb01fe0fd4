use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors.
///
/// `ui` does not know each platform's `Route` enum, so the web and desktop crates register a
/// `NavBuilder` whose closures return fully built `Link` elements. Each closure receives the
/// localized label and must render it as the link's only child.
///
/// Example (in platform crate):
/// ```ignore
/// register_nav(NavBuilder {
///     products: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     product: |slug, label| rsx!( Link { to: Route::ProductView { slug: slug.to_string() }, "{label}" } ),
/// });
/// ```
///
/// Without a builder (server-side rendering, tests) plain anchors are rendered instead.
pub struct NavBuilder {
    pub products: fn(label: &str) -> Element,
    pub product: fn(slug: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the product page for `slug`.
pub fn product_link(slug: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.product)(slug, label),
        None => rsx! {
            a { class: "product-card__link", href: "/product/{slug}", "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(|| match lang_code_ctx {
        Some(code) => code.peek().clone(),
        None => i18n::current_language(),
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    // The shared signal wins so a remounted navbar shows the active locale.
    let selected = lang_code_ctx.map(|c| c()).unwrap_or_else(|| current_lang());

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[i18n] AppNavbar render lang={_lang_marker}");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("[i18n] could not switch to {val}: {err}"),
        }
    };

    let products_label = t!("nav-products");
    let products_link: Element = match NAV_BUILDER.get() {
        Some(builder) => (builder.products)(&products_label),
        None => rsx! {
            a { class: "navbar__link", href: "/", "{products_label}" }
        },
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Affilio" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links", {products_link} }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{selected}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
