//! Internationalization (i18n) support for `cementerio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/cementerio-ui.ftl   (fallback/reference)
//!   es-ES/cementerio-ui.ftl
//!   fr-FR/cementerio-ui.ftl
//! ```
//!
//! Only UI chrome is translated here. Catalog content (names, descriptions)
//! and the lead-phrase idioms are shown as delivered.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use time::Month;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("graveyard-count", count = 3)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "cementerio-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro. The fallback bundle is
/// loaded eagerly so lookups work before (or without) [`init`].
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = loader.load_fallback_language(&Localizations) {
        warn!("[i18n] failed loading fallback bundle ({err})");
    }
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
        // Freshly selected bundles start with isolation marks on again.
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

/// Long month name in the active language.
pub fn month_name(month: Month) -> String {
    match month {
        Month::January => t!("month-january"),
        Month::February => t!("month-february"),
        Month::March => t!("month-march"),
        Month::April => t!("month-april"),
        Month::May => t!("month-may"),
        Month::June => t!("month-june"),
        Month::July => t!("month-july"),
        Month::August => t!("month-august"),
        Month::September => t!("month-september"),
        Month::October => t!("month-october"),
        Month::November => t!("month-november"),
        Month::December => t!("month-december"),
    }
}

/// Badge text for a product category. The catalog translator writes the
/// category in the target language, so the localized spellings are
/// recognized too; anything else is shown verbatim.
pub fn kind_label(kind: &str) -> String {
    match kind.trim().to_lowercase().as_str() {
        "" => String::new(),
        "app" | "aplicación" | "application" => t!("kind-app"),
        "service" | "servicio" => t!("kind-service"),
        "hardware" | "matériel" => t!("kind-hardware"),
        _ => kind.trim().to_string(),
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
