//! Internationalization (i18n) for the site's two published languages.
//!
//! # Architecture
//!
//! - `registry`: the supported languages and their metadata
//! - `language`: validated `Language` type
//! - `strings`: the English and Chinese bundles
//! - `table`: `ContentTable`, the `(language, key)` lookup handed to consumers
//! - `validator`: completeness checks over a table
//! - `metrics`: localization counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{ContentTable, Language};
//!
//! let table = ContentTable::builtin();
//! let title = table.lookup(Language::CHINESE, "heroTitle");
//! ```

mod language;
mod metrics;
mod registry;
pub mod strings;
mod table;
mod validator;

pub use language::{Language, LanguageError};
pub use metrics::{MetricsReport, SyncMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LocaleBundle;
pub use table::ContentTable;
pub use validator::{BundleValidator, ValidationReport};
