//! Locale content synchronization.
//!
//! One pass rewrites a page for a language: navigation links, the health-topic
//! dropdown, the footer, the section updater for the current route, and the
//! language toggle controls. Every value is re-derived from the table and the
//! page, so repeating a pass with the same language changes nothing.

mod sections;

pub use sections::SectionUpdater;

use crate::category::Category;
use crate::dom::Page;
use crate::i18n::{ContentTable, Language, LanguageRegistry};
use crate::page::{NavRoute, PageIdentity};
use crate::physicians::{Physician, PhysicianMap};
use sections::{SectionContext, SlotWriter};
use tracing::debug;

/// Class carried by the toggle control of the active language.
pub const ACTIVE_CLASS: &str = "active";

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub page: PageIdentity,
    pub updater: Option<SectionUpdater>,
    pub slots_written: usize,
    pub slots_skipped: usize,
}

/// Applies a language to pages using an injected content table.
#[derive(Debug, Clone, Copy)]
pub struct Synchronizer<'a> {
    table: &'a ContentTable,
    physicians: &'a [Physician],
}

impl<'a> Synchronizer<'a> {
    pub fn new(table: &'a ContentTable, physicians: &'a [Physician]) -> Self {
        Self { table, physicians }
    }

    /// Rewrite `page`, currently shown at `path`, for `language`.
    ///
    /// `map` is the physician map if one has been initialized; without it the
    /// physicians page only gets its text slots.
    pub fn synchronize(
        &self,
        language: Language,
        page: &mut Page,
        path: &str,
        map: Option<&mut PhysicianMap>,
    ) -> SyncReport {
        let bundle = self.table.bundle(language);
        let mut writer = SlotWriter::new(page, bundle);

        for link in writer.page.query_all(".nav-link") {
            let route = writer.page.attribute(link, "href").and_then(NavRoute::from_href);
            if let Some(route) = route {
                writer.write_slot(Some(link), bundle.nav(route));
            }
        }

        for item in writer.page.query_all("[data-dropdown-item]") {
            let category = writer
                .page
                .attribute(item, "data-dropdown-item")
                .and_then(Category::from_id);
            if let Some(category) = category {
                writer.write_slot(Some(item), bundle.dropdown(category.id()));
            }
        }

        let footer = writer.page.query(".footer-text");
        writer.write_slot(footer, bundle.content("footerText"));

        let identity = PageIdentity::classify(path);
        let updater = SectionUpdater::for_page(identity);
        if let Some(updater) = updater {
            let ctx = SectionContext {
                table: self.table,
                language,
                physicians: self.physicians,
            };
            updater.apply(&mut writer, &ctx, map);
        }

        let report = SyncReport {
            page: identity,
            updater,
            slots_written: writer.written,
            slots_skipped: writer.skipped,
        };

        update_toggle_buttons(page, language);

        debug!(
            "Synchronized {} for {} ({:?}): {} written, {} skipped",
            path, language, identity, report.slots_written, report.slots_skipped
        );
        report
    }
}

/// Mark the toggle for `language` active and clear the others. Does nothing
/// unless every toggle control is on the page.
pub fn update_toggle_buttons(page: &mut Page, language: Language) {
    let registry = LanguageRegistry::get();
    let toggles: Option<Vec<_>> = registry
        .list_all()
        .into_iter()
        .map(|config| page.element_by_id(config.toggle_id).map(|node| (config.code, node)))
        .collect();

    let Some(toggles) = toggles else {
        return;
    };
    for (_, node) in &toggles {
        page.remove_class(*node, ACTIVE_CLASS);
    }
    for (code, node) in toggles {
        if code == language.code() {
            page.add_class(node, ACTIVE_CLASS);
        }
    }
}
