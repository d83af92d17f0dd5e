//! Localization for `pitwall-ui`.
//!
//! Wires together `i18n-embed` (language selection and asset loading),
//! `fluent` (message formatting), `rust-embed` (compile-time embedding of the
//! `.ftl` files) and `i18n-embed-fl` (compile-time checked `fl!` lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/pitwall_ui.ftl   (fallback/reference)
//!   it-IT/pitwall_ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let loading = crate::t!("chart-loading");
//! ```
//!
//! Adding a locale: copy `en-US/pitwall_ui.ftl` to `i18n/<lang-id>/`,
//! translate the values (IDs and `$placeholders` stay identical), then
//! register the locale in `tests/i18n_coverage.rs`.
//!
//! Desktop builds ask the OS for preferred languages, web builds read
//! `navigator.languages`. Assets are always embedded on WASM.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
///
/// ```ignore
/// t!("chart-hint");
/// t!("chart-caption", shown = 10, total = 20);
/// ```
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain. `fl!` derives the same name from the package name with
/// dashes turned into underscores, so the files are `i18n/<lang>/{DOMAIN}.ftl`.
const DOMAIN: &str = "pitwall_ui";

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
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            debug!(tag, "ignoring unparseable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    info!(language = tag, "language switched");
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

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
