//! The reader's language session.
//!
//! Holds the active language, persists every change write-through, runs the
//! synchronizer over the current view, fires the advisory notification and
//! works out whether the reader must be redirected to the other health-card
//! root.

use crate::dom::Page;
use crate::i18n::{Language, LanguageError, SyncMetrics};
use crate::notify::LanguageNotifier;
use crate::page::equivalent_route;
use crate::physicians::PhysicianMap;
use crate::preference::{PreferenceStore, LANGUAGE_KEY};
use crate::sync::{SyncReport, Synchronizer};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A page as currently shown: the document, its path and the map, if the
/// page has initialized one.
#[derive(Debug, Clone)]
pub struct PageView {
    pub page: Page,
    pub path: String,
    pub map: Option<PhysicianMap>,
}

impl PageView {
    pub fn new(page: Page, path: &str) -> Self {
        Self {
            page,
            path: path.to_string(),
            map: None,
        }
    }

    pub fn with_map(mut self, map: PhysicianMap) -> Self {
        self.map = Some(map);
        self
    }

    pub fn synchronize(&mut self, sync: &Synchronizer<'_>, language: Language) -> SyncReport {
        let report = sync.synchronize(language, &mut self.page, &self.path, self.map.as_mut());
        SyncMetrics::global().record_pass(report.slots_written, report.slots_skipped);
        report
    }
}

/// What a language selection did.
#[derive(Debug)]
pub struct LanguageChange {
    pub language: Language,
    pub report: SyncReport,

    /// Route the reader should be sent to, if any
    pub redirect: Option<String>,

    /// Handle of the spawned notification, if one was sent
    pub notification: Option<JoinHandle<()>>,
}

pub struct LanguageSession<S: PreferenceStore> {
    current: Language,
    store: S,
    notifier: Option<LanguageNotifier>,
}

impl<S: PreferenceStore> LanguageSession<S> {
    /// Read the stored preference once. Absent, unreadable or unknown values
    /// fall back to the canonical language.
    pub fn initialize(store: S) -> Self {
        let current = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|e| {
                warn!("Ignoring stored language preference: {}", e);
                Language::canonical()
            }),
            Ok(None) => Language::canonical(),
            Err(e) => {
                warn!("Could not read language preference: {}", e);
                Language::canonical()
            }
        };

        Self {
            current,
            store,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: LanguageNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial pass on page load: apply the stored language without
    /// persisting or notifying.
    pub fn load(&self, sync: &Synchronizer<'_>, view: &mut PageView) -> SyncReport {
        view.synchronize(sync, self.current)
    }

    /// Switch to `language`: persist, re-render, notify, and report the
    /// redirect target for health-card routes.
    pub fn set_language(
        &mut self,
        language: Language,
        sync: &Synchronizer<'_>,
        view: &mut PageView,
    ) -> LanguageChange {
        self.current = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!("Could not persist language preference: {}", e);
        }

        let report = view.synchronize(sync, language);
        let notification = self
            .notifier
            .as_ref()
            .and_then(|notifier| notifier.notify(language));
        let redirect = equivalent_route(&view.path, language);

        info!(
            "Language set to {} on {}{}",
            language,
            view.path,
            redirect
                .as_deref()
                .map(|to| format!(", redirecting to {}", to))
                .unwrap_or_default()
        );

        LanguageChange {
            language,
            report,
            redirect,
            notification,
        }
    }

    /// Switch by code. An unknown code fails closed: the current language is
    /// kept, nothing is written and the error is returned.
    pub fn select_code(
        &mut self,
        code: &str,
        sync: &Synchronizer<'_>,
        view: &mut PageView,
    ) -> Result<LanguageChange, LanguageError> {
        match Language::from_code(code) {
            Ok(language) => Ok(self.set_language(language, sync, view)),
            Err(e) => {
                warn!("Rejected language selection, keeping {}: {}", self.current, e);
                Err(e)
            }
        }
    }
}
