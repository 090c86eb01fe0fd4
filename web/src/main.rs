use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::core::config::PageConfig;
use ui::views::{Home, ProductView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/product/:slug")]
    ProductView { slug: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_products(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_product(slug: &str, label: &str) -> Element {
    rsx!(Link {
        class: "product-card__link",
        to: Route::ProductView {
            slug: slug.to_string()
        },
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            products: nav_products,
            product: nav_product,
        });
    }

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(PageConfig::default);

    use_hook(|| {
        if let Err(err) = ui::catalog::shared() {
            tracing::error!("embedded catalog failed to load: {err}");
        }
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}
