//! Internationalization (i18n) support for `affilio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/affilio-ui.ftl   (fallback/reference)
//!   es-ES/affilio-ui.ftl
//!   fr-FR/affilio-ui.ftl
//! ```
//!
//! Two lookup paths exist:
//! - `t!("nav-products")` for fixed chrome (navbar, home). Keys are checked at compile time.
//! - [`Translator`] for the product page. It is a plain value passed as a prop so the page
//!   stays a function of `(product, translate)` and tests can swap the lookup.
//!
//! To add a new locale:
//! 1. Copy `en-US/affilio-ui.ftl` to `i18n/<lang-id>/affilio-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
use std::collections::HashMap;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-products")
///     t!("hero-reviews", rating = "4.5", count = "120")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "affilio-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
        // Bidi isolation marks would end up inside prices and counts.
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    tracing::debug!("[i18n] language switched to {tag}");
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language the loader currently resolves messages in (`en-US` until `init` selects another).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Look up `key` in the shared loader, substituting named `args`.
pub fn lookup(key: &str, args: &[(&str, String)]) -> String {
    init();
    if args.is_empty() {
        return LOADER.get(key);
    }
    let args: HashMap<&str, &str> = args
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    LOADER.get_args(key, args)
}

/// The `translate(key)` collaborator of the product page.
///
/// A thin copyable wrapper over a lookup function so it can travel as a component prop.
#[derive(Clone, Copy)]
pub struct Translator {
    lookup: fn(&str, &[(&str, String)]) -> String,
}

impl Translator {
    pub const fn new(lookup: fn(&str, &[(&str, String)]) -> String) -> Self {
        Self { lookup }
    }

    pub fn tr(&self, key: &str) -> String {
        (self.lookup)(key, &[])
    }

    pub fn tr_with(&self, key: &str, args: &[(&str, String)]) -> String {
        (self.lookup)(key, args)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(lookup)
    }
}

/// Props memoization hint only. Function addresses are not guaranteed unique, so two equal
/// translators may still compare unequal (the page then just re-renders).
impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.lookup as usize == other.lookup as usize
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
