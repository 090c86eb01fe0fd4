//! Product catalog: the data model behind every product page and the embedded JSON source.
//!
//! Products are read-only once loaded. The page components only borrow them.

mod product;

pub use product::{FaqEntry, Product, Testimonial};

use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;
use url::Url;

/// Catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json"));

static SHARED: Lazy<Result<Catalog, CatalogError>> = Lazy::new(Catalog::embedded);

/// Embedded catalog, parsed once per process.
pub fn shared() -> Result<&'static Catalog, &'static CatalogError> {
    SHARED.as_ref()
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("slug `{0}` is used by more than one product")]
    DuplicateSlug(String),
    #[error("product `{slug}` has a hoplink that is not an absolute http(s) URL: `{hoplink}`")]
    InvalidHoplink { slug: String, hoplink: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate the catalog shipped with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
            if !is_absolute_http_url(&product.hoplink) {
                return Err(CatalogError::InvalidHoplink {
                    slug: product.slug.clone(),
                    hoplink: product.hoplink.clone(),
                });
            }
        }

        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    pub fn get(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Products in file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn is_absolute_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
