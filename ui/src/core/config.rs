//! Page-level settings shared by every product page.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Appended to every displayed price.
    pub currency_suffix: String,
    /// Image shown when a product has none.
    pub placeholder_image: String,
    /// Named in the "secure payment via ..." trust badge.
    pub payment_provider: String,
    pub guarantee_days: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            currency_suffix: "€".to_string(),
            placeholder_image: "/placeholder.svg".to_string(),
            payment_provider: "ClickBank".to_string(),
            guarantee_days: 60,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Config from context, or the defaults when the platform did not provide one.
pub fn use_page_config() -> PageConfig {
    try_use_context::<PageConfig>().unwrap_or_default()
}
