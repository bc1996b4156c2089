//! Language type: a locale validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a caller names a locale the site does not publish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unsupported(String),
}

/// A validated language.
///
/// Only the codes in the registry can be turned into a `Language`, so code
/// holding one never has to handle an unknown locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// The primary locale.
    pub const ENGLISH: Language = Language { code: "en" };

    /// The secondary locale.
    pub const CHINESE: Language = Language { code: "zh" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err(LanguageError::Unsupported)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }

    /// The canonical (primary) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// The other of the two published languages.
    pub fn other(&self) -> Language {
        if self.is_canonical() {
            Language::CHINESE
        } else {
            Language::canonical()
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen for
    /// values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Element id of the toggle control selecting this language.
    pub fn toggle_id(&self) -> &'static str {
        self.config().toggle_id
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.config().name, "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_chinese_constant() {
        let chinese = Language::CHINESE;
        assert_eq!(chinese.code(), "zh");
        assert_eq!(chinese.config().native_name, "中文");
        assert!(!chinese.is_canonical());
    }

    #[test]
    fn test_from_code_roundtrips_constants() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("zh").unwrap(), Language::CHINESE);
    }

    #[test]
    fn test_from_code_invalid() {
        let err = Language::from_code("fr").unwrap_err();
        assert_eq!(err, LanguageError::Unsupported("fr".to_string()));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_other_flips() {
        assert_eq!(Language::ENGLISH.other(), Language::CHINESE);
        assert_eq!(Language::CHINESE.other(), Language::ENGLISH);
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_parse_and_display() {
        let lang: Language = "zh".parse().unwrap();
        assert_eq!(lang.to_string(), "zh");
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggle_ids_differ() {
        assert_eq!(Language::ENGLISH.toggle_id(), "langEnglish");
        assert_eq!(Language::CHINESE.toggle_id(), "langChinese");
    }
}
