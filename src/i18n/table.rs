//! The bilingual content table.
//!
//! A `ContentTable` pairs one `LocaleBundle` with each published language. The
//! built-in table is created once, but consumers receive it by reference so
//! tests can substitute their own bundles.

use crate::i18n::strings::{CHINESE_BUNDLE, ENGLISH_BUNDLE};
use crate::i18n::{Language, LocaleBundle};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct ContentTable {
    primary: LocaleBundle,
    secondary: LocaleBundle,
}

static BUILTIN: OnceLock<ContentTable> = OnceLock::new();

impl ContentTable {
    /// Build a table from a primary (English) and secondary (Chinese) bundle.
    pub fn new(primary: LocaleBundle, secondary: LocaleBundle) -> Self {
        Self { primary, secondary }
    }

    /// The site's own strings.
    pub fn builtin() -> &'static ContentTable {
        BUILTIN.get_or_init(|| ContentTable::new(ENGLISH_BUNDLE, CHINESE_BUNDLE))
    }

    pub fn bundle(&self, language: Language) -> &LocaleBundle {
        if language.is_canonical() {
            &self.primary
        } else {
            &self.secondary
        }
    }

    /// Content slot lookup for `(language, key)`. Pure; `None` means "no update".
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.bundle(language).content(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::NavRoute;

    #[test]
    fn test_builtin_is_singleton() {
        assert!(std::ptr::eq(ContentTable::builtin(), ContentTable::builtin()));
    }

    #[test]
    fn test_bundle_selects_by_language() {
        let table = ContentTable::builtin();
        assert_eq!(table.bundle(Language::ENGLISH).nav(NavRoute::Home), Some("Home"));
        assert_eq!(table.bundle(Language::CHINESE).nav(NavRoute::Home), Some("首頁"));
    }

    #[test]
    fn test_lookup() {
        let table = ContentTable::builtin();
        assert_eq!(table.lookup(Language::CHINESE, "heroSubtitle"), Some("西北大學"));
        assert_eq!(table.lookup(Language::ENGLISH, "missing"), None);
    }

    #[test]
    fn test_custom_table() {
        const EMPTY: LocaleBundle = LocaleBundle {
            nav: &[],
            dropdown: &[],
            content: &[("only", "one")],
        };
        let table = ContentTable::new(EMPTY, ENGLISH_BUNDLE);
        assert_eq!(table.lookup(Language::ENGLISH, "only"), Some("one"));
        assert_eq!(table.lookup(Language::CHINESE, "only"), None);
    }
}
