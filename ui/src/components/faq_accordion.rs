use dioxus::prelude::*;

use crate::catalog::FaqEntry;
use crate::core::accordion::AccordionState;

/// FAQ entries that expand and collapse independently. All start collapsed.
#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> Element {
    let mut state = use_signal(AccordionState::default);

    rsx! {
        div { class: "accordion",
            for (index, entry) in entries.iter().enumerate() {
                {
                    let open = state.read().is_open(index);
                    let item_class = if open {
                        "accordion__item accordion__item--open"
                    } else {
                        "accordion__item"
                    };
                    rsx! {
                        div {
                            key: "{index}",
                            class: item_class,
                            "data-accordion-item": "{index}",
                            button {
                                r#type: "button",
                                class: "accordion__trigger",
                                aria_expanded: "{open}",
                                onclick: move |_| state.write().toggle(index),
                                span { class: "accordion__question", "{entry.question}" }
                                span { class: "accordion__chevron", aria_hidden: "true",
                                    if open { "−" } else { "+" }
                                }
                            }
                            if open {
                                div { class: "accordion__content", "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
