use dioxus::prelude::*;

#[component]
pub fn TrustBadges(items: Vec<String>) -> Element {
    rsx! {
        ul { class: "trust-badges",
            for (index, item) in items.iter().enumerate() {
                li { key: "{index}", class: "trust-badges__item", "{item}" }
            }
        }
    }
}
