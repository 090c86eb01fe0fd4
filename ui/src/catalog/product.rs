use serde::{Deserialize, Serialize};

/// One affiliate product, exactly as the catalog describes it.
///
/// Field names follow the catalog JSON (camelCase). Missing lists load as empty lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub short_description: String,
    pub long_description: String,
    pub image: Option<String>,
    /// Headline score, expected in `0.0..=5.0`.
    pub rating: f64,
    pub reviews: u32,
    pub price: f64,
    /// Affiliate URL every buy control opens.
    pub hoplink: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
}

impl Product {
    /// Image source, or `placeholder` when the product has no (or an empty) image.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(src) if !src.trim().is_empty() => src,
            _ => placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
