//! Content table validation.
//!
//! A key present in one bundle but not the other means a slot silently stays in
//! the template language, so the validator reports those as errors. Softer
//! problems (empty strings, secondary strings with no Han characters) are
//! reported as warnings.

use crate::category::Category;
use crate::i18n::{ContentTable, Language, LocaleBundle};
use crate::page::NavRoute;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a content table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that leave a slot unlocalized
    pub errors: Vec<String>,

    /// Non-critical findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the bilingual content table.
pub struct BundleValidator;

static HAN_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Check a table for completeness and obvious translation gaps.
    pub fn validate(table: &ContentTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let primary = table.bundle(Language::ENGLISH);
        let secondary = table.bundle(Language::CHINESE);

        Self::check_content_keys(primary, secondary, &mut report);

        for (language, bundle) in [(Language::ENGLISH, primary), (Language::CHINESE, secondary)] {
            for route in NavRoute::ALL {
                if bundle.nav(route).is_none() {
                    report.errors.push(format!(
                        "[{}] missing nav entry for {}",
                        language,
                        route.href()
                    ));
                }
            }

            for category in Category::ALL {
                if bundle.dropdown(category.id()).is_none() {
                    report.errors.push(format!(
                        "[{}] missing dropdown entry for '{}'",
                        language,
                        category.id()
                    ));
                }
                if bundle.content(category.content_key()).is_none() {
                    report.errors.push(format!(
                        "[{}] missing card title '{}' for category '{}'",
                        language,
                        category.content_key(),
                        category.id()
                    ));
                }
            }

            for (key, text) in bundle.content {
                if text.trim().is_empty() {
                    report
                        .warnings
                        .push(format!("[{}] content '{}' is empty", language, key));
                }
            }
        }

        let han = Self::han_regex();
        for (key, text) in secondary.content {
            if !text.is_empty() && !han.is_match(text) {
                report.warnings.push(format!(
                    "[{}] content '{}' has no Chinese characters, possibly untranslated",
                    Language::CHINESE,
                    key
                ));
            }
        }

        report
    }

    fn check_content_keys(
        primary: &LocaleBundle,
        secondary: &LocaleBundle,
        report: &mut ValidationReport,
    ) {
        let primary_keys: BTreeSet<_> = primary.content_keys().collect();
        let secondary_keys: BTreeSet<_> = secondary.content_keys().collect();

        for key in primary_keys.difference(&secondary_keys) {
            report.errors.push(format!(
                "content '{}' exists in {} but not in {}",
                key,
                Language::ENGLISH,
                Language::CHINESE
            ));
        }
        for key in secondary_keys.difference(&primary_keys) {
            report.errors.push(format!(
                "content '{}' exists in {} but not in {}",
                key,
                Language::CHINESE,
                Language::ENGLISH
            ));
        }
    }

    fn han_regex() -> &'static Regex {
        HAN_REGEX.get_or_init(|| Regex::new(r"\p{Han}").unwrap())
    }
}
