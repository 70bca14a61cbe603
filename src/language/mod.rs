//! Language names and aliases
//!
//! Maps user-facing alias strings (`js`, `yml`, `py`) onto canonical
//! [`LanguageId`]s and canonical identifiers onto display names.

mod catalog;
mod id;

pub use catalog::LanguageCatalog;
pub use id::LanguageId;

use once_cell::sync::Lazy;

use crate::detector::table::ALL_LANGUAGES;

static BUILTIN_CATALOG: Lazy<LanguageCatalog> = Lazy::new(|| {
    LanguageCatalog::from_definitions(ALL_LANGUAGES)
        .expect("built-in language aliases are unique")
});

/// Alias catalog over the built-in rule table
#[must_use]
pub fn builtin_catalog() -> &'static LanguageCatalog {
    &BUILTIN_CATALOG
}

/// Map an alias or raw identifier to its canonical identifier, or plain text.
#[must_use]
pub fn normalize_language_alias(input: &str) -> LanguageId {
    BUILTIN_CATALOG.normalize(input)
}

/// Human-readable name for an identifier or alias, falling back to the
/// uppercased input.
#[must_use]
pub fn display_name(lang: &str) -> String {
    BUILTIN_CATALOG.display_name(lang)
}

/// All canonical identifiers, sorted
#[must_use]
pub fn list_supported_languages() -> Vec<&'static str> {
    BUILTIN_CATALOG
        .supported()
        .into_iter()
        .map(LanguageId::as_str)
        .collect()
}

/// Every alias string known to the built-in catalog, sorted
#[must_use]
pub fn list_known_aliases() -> Vec<&'static str> {
    BUILTIN_CATALOG.known_aliases()
}
