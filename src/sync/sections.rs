//! Per-page section updaters.
//!
//! Each updater is a fixed list of "select, and if present overwrite" steps
//! against the content table. Missing nodes and missing keys are counted as
//! skipped and otherwise ignored.

use crate::category::Category;
use crate::dom::{NodeId, Page};
use crate::i18n::{ContentTable, Language, LocaleBundle};
use crate::page::{CardsRoot, PageIdentity};
use crate::physicians::{popup_html, Marker, Physician, PhysicianMap};

/// Writes bundle strings into a page and counts the outcome.
pub(crate) struct SlotWriter<'a> {
    pub(crate) page: &'a mut Page,
    bundle: &'a LocaleBundle,
    pub(crate) written: usize,
    pub(crate) skipped: usize,
}

impl<'a> SlotWriter<'a> {
    pub(crate) fn new(page: &'a mut Page, bundle: &'a LocaleBundle) -> Self {
        Self {
            page,
            bundle,
            written: 0,
            skipped: 0,
        }
    }

    /// First match of `selector` gets content slot `key`.
    fn text(&mut self, selector: &str, key: &str) {
        let node = self.page.query(selector);
        self.write_slot(node, self.bundle.content(key));
    }

    /// The n-th match of `selector` gets the n-th key, but only when the page
    /// has at least as many matches as there are keys.
    fn indexed(&mut self, selector: &str, keys: &[&str]) {
        let nodes = self.page.query_all(selector);
        if nodes.len() < keys.len() {
            self.skipped += keys.len();
            return;
        }
        for (node, key) in nodes.into_iter().zip(keys) {
            self.write_slot(Some(node), self.bundle.content(key));
        }
    }

    /// Every match of `selector` gets content slot `key`.
    fn each(&mut self, selector: &str, key: &str) {
        for node in self.page.query_all(selector) {
            self.write_slot(Some(node), self.bundle.content(key));
        }
    }

    pub(crate) fn write_slot(&mut self, node: Option<NodeId>, text: Option<&str>) {
        match (node, text) {
            (Some(node), Some(text)) => {
                self.page.set_text(node, text);
                self.written += 1;
            }
            _ => self.skipped += 1,
        }
    }

    fn write_html(&mut self, selector: &str, html: Option<String>) {
        match (self.page.query(selector), html) {
            (Some(node), Some(html)) => {
                self.page.set_inner_html(node, &html);
                self.written += 1;
            }
            _ => self.skipped += 1,
        }
    }
}

/// Inputs a section updater may read besides the page.
pub(crate) struct SectionContext<'a> {
    pub(crate) table: &'a ContentTable,
    pub(crate) language: Language,
    pub(crate) physicians: &'a [Physician],
}

/// One updater per page kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionUpdater {
    Home,
    Team,
    HealthCards(CardsRoot),
    Contact,
    Physicians,
}

impl SectionUpdater {
    /// The updater for a page, or `None` for unrecognized routes.
    pub fn for_page(identity: PageIdentity) -> Option<SectionUpdater> {
        match identity {
            PageIdentity::Home => Some(SectionUpdater::Home),
            PageIdentity::Team => Some(SectionUpdater::Team),
            PageIdentity::HealthCards(root) => Some(SectionUpdater::HealthCards(root)),
            PageIdentity::Contact => Some(SectionUpdater::Contact),
            PageIdentity::Physicians => Some(SectionUpdater::Physicians),
            PageIdentity::None => None,
        }
    }

    pub(crate) fn apply(
        &self,
        writer: &mut SlotWriter<'_>,
        ctx: &SectionContext<'_>,
        map: Option<&mut PhysicianMap>,
    ) {
        match self {
            SectionUpdater::Home => update_home(writer),
            SectionUpdater::Team => update_team(writer),
            SectionUpdater::HealthCards(root) => update_health_cards(writer, ctx, *root),
            SectionUpdater::Contact => update_contact(writer),
            SectionUpdater::Physicians => update_physicians(writer, ctx, map),
        }
    }
}

fn update_home(writer: &mut SlotWriter<'_>) {
    for (selector, key) in [
        (".hero-title", "heroTitle"),
        (".hero-subtitle", "heroSubtitle"),
        (".about-title", "aboutTitle"),
        (".what-we-do-title", "whatWeDoTitle"),
        (".resources-title", "resourcesTitle"),
        (".contact-title", "homeContactTitle"),
        (".about-intro p", "aboutText"),
        (".about-intro .btn", "meetTeamBtn"),
        (".resources-cta .btn", "viewResourcesBtn"),
        (".cta-content p", "contactText"),
    ] {
        writer.text(selector, key);
    }

    writer.indexed(".hero-buttons .btn", &["heroMeetTeamBtn", "heroOurResourcesBtn"]);
    writer.indexed(
        ".activity-card h3",
        &["volunteerTitle", "infoDeskTitle", "publicEventsTitle", "socialsTitle"],
    );
    writer.indexed(
        ".activity-card p",
        &["volunteerText", "infoDeskText", "publicEventsText", "socialsText"],
    );

    let follow = writer
        .bundle
        .content("followUsText")
        .map(|text| format!("<span>📷</span> {}", crate::dom::escape_text(text)));
    writer.write_html(".social-link", follow);
}

fn update_team(writer: &mut SlotWriter<'_>) {
    for (selector, key) in [
        (".page-header h1", "teamTitle"),
        (".page-header p", "teamSubtitle"),
        (".content-section p", "teamDescription"),
        (".team-note p", "teamFunFact"),
        (".join-team h2", "joinTeamTitle"),
        (".join-team p", "joinTeamText"),
    ] {
        writer.text(selector, key);
    }
}

fn update_contact(writer: &mut SlotWriter<'_>) {
    for (selector, key) in [
        (".page-header h1", "contactTitle"),
        (".page-header p", "contactSubtitle"),
        (".contact-info p", "contactDescription"),
        (".contact-form h3", "contactFormTitle"),
        (".contact-form label[for=name]", "formNameLabel"),
        (".contact-form label[for=email]", "formEmailLabel"),
        (".contact-form label[for=message]", "formMessageLabel"),
        (".contact-form .btn", "formSubmitBtn"),
    ] {
        writer.text(selector, key);
    }
}

fn update_health_cards(writer: &mut SlotWriter<'_>, ctx: &SectionContext<'_>, root: CardsRoot) {
    for (selector, key) in [
        (".page-header h1", "healthCardsTitle"),
        (".page-header p", "healthCardsSubtitle"),
        (".intro-text p", "healthCardsDescription"),
        (".intro-text p:nth-child(2)", "healthCardsNote"),
        (".cta-content h2", "needHelpTitle"),
        (".cta-content p", "needHelpText"),
        (".cta-content .btn", "contactUsBtn"),
        (".resources-empty", "resourcesEmpty"),
    ] {
        writer.text(selector, key);
    }
    writer.each(".resource-download", "downloadLabel");

    // Language labels of listed files come from the file name, not the table.
    let label_attribute = if ctx.language.is_canonical() {
        "data-label-en"
    } else {
        "data-label-zh"
    };
    for node in writer.page.query_all(".resource-language") {
        let label = writer.page.attribute(node, label_attribute).map(str::to_string);
        writer.write_slot(Some(node), label.as_deref());
    }

    let active = ctx.table.bundle(ctx.language);
    let primary = ctx.table.bundle(Language::ENGLISH);
    let secondary = ctx.table.bundle(Language::CHINESE);

    for card in writer.page.query_all("[data-category-id]") {
        let Some(category) = writer
            .page
            .attribute(card, "data-category-id")
            .and_then(Category::from_id)
        else {
            writer.skipped += 1;
            continue;
        };
        let key = category.content_key();
        let title = writer.page.query_within(card, ".category-title");
        let subtitle = writer.page.query_within(card, ".category-subtitle");

        // Subtitles are pinned to the language opposite the route root, so a
        // gloss in the other language always sits under the title.
        match root {
            CardsRoot::Primary => {
                writer.write_slot(subtitle, secondary.content(key));
            }
            CardsRoot::Secondary => {
                writer.write_slot(title, active.content(key));
                writer.write_slot(subtitle, primary.content(key));
            }
        }
    }
}

fn update_physicians(
    writer: &mut SlotWriter<'_>,
    ctx: &SectionContext<'_>,
    map: Option<&mut PhysicianMap>,
) {
    for (selector, key) in [
        (".page-header h1", "physiciansTitle"),
        (".page-header p", "physiciansSubtitle"),
        (".physicians-intro p", "physiciansDescription"),
        (".map-note", "physiciansMapNote"),
    ] {
        writer.text(selector, key);
    }

    let Some(map) = map else {
        return;
    };
    map.clear();
    for physician in ctx.physicians {
        map.add_marker(Marker {
            lat: physician.lat,
            lng: physician.lng,
            popup: popup_html(physician, ctx.table, ctx.language),
        });
    }
}
