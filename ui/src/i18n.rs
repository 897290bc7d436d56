//! Internationalization for the story chrome: navigation, the reading-flow
//! widgets, export status lines and the ticker lookup.
//!
//! Chapter prose is authored in English and is not routed through Fluent.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/marketvote-ui.ftl   (fallback/reference)
//!   es-ES/marketvote-ui.ftl
//!   fr-FR/marketvote-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-macro");
//! let done = t!("export-done", path = "/tmp/my-reading-journey.png");
//! ```
//!
//! Web builds read `navigator.languages`, native builds read the OS locale
//! list. Assets are always embedded on WASM (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
///
/// ```ignore
/// t!("nav-macro")
/// t!("ticker-showing", ticker = "AAPL")
/// ```
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared
/// loader and is checked against the fallback FTL at compile time.
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
const DOMAIN: &str = "marketvote-ui";

/// Language every other locale is checked against.
pub const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "Localization bundles loaded"),
            Err(err) => warn!("Failed selecting languages ({err}); continuing with fallback"),
        }
        disable_isolation();
    });
}

/// Unicode isolation marks would leak into file paths and percentages. The
/// flag lives on the loaded bundles, so it is reapplied after every select.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// Language tag the loader currently serves, e.g. `fr-FR`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "Ignoring unparseable language tag");
        return Ok(());
    };
    let result = i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ());
    disable_isolation();
    result
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
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

/// Serializes tests that switch or depend on the loaded bundles.
#[cfg(test)]
pub(crate) fn language_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    init();
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK));
    }

    #[test]
    fn all_three_locales_are_embedded() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn basic_lookup_works() {
        init();
        assert_eq!(fl!(&*LOADER, "brand-title"), "The Market's Vote");
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        let _guard = language_guard();
        let text = fl!(&*LOADER, "snapshot-completion", percent = "42.0");
        assert!(text.contains("42.0"));
        assert!(!text.contains('\u{2068}'));
        assert!(!text.contains('\u{2069}'));
    }

    #[test]
    fn switching_language_keeps_isolation_off() {
        let _guard = language_guard();
        set_language("fr-FR").expect("select fr-FR");
        assert_eq!(current_language(), "fr-FR");
        let text = fl!(&*LOADER, "ticker-showing", ticker = "AAPL");
        assert!(text.contains("AAPL"));
        assert!(!text.contains('\u{2068}'));

        set_language(FALLBACK).expect("restore fallback");
        assert_eq!(current_language(), FALLBACK);
        let text = fl!(&*LOADER, "ticker-showing", ticker = "AAPL");
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn unknown_language_keeps_current_strings() {
        let _guard = language_guard();
        let before = fl!(&*LOADER, "nav-macro");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-macro");
        assert_eq!(before, after);
    }
}
