//! Page templates.
//!
//! Templates render the site's markup with English defaults (the mirrored
//! health-card root renders Chinese card titles). The synchronizer then
//! localizes the result for the reader's language.

use crate::category::Category;
use crate::dom::{el, Element, Page};
use crate::i18n::{ContentTable, Language, LanguageRegistry};
use crate::page::{CardsRoot, NavRoute};
use crate::resources::{resources_for_category, Resource};
use crate::session::PageView;
use anyhow::Result;
use std::path::Path;

const INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Every page the server renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Team,
    HealthCards(CardsRoot),
    CategoryDetail(CardsRoot, Category),
    Contact,
    Physicians,
}

impl Route {
    /// Route served at exactly `path`, as the server router matches it.
    pub fn resolve(path: &str) -> Option<Route> {
        if let Some(route) = NavRoute::from_href(path) {
            return Some(match route {
                NavRoute::Home => Route::Home,
                NavRoute::Team => Route::Team,
                NavRoute::HealthCards => Route::HealthCards(CardsRoot::Primary),
                NavRoute::Physicians => Route::Physicians,
                NavRoute::Contact => Route::Contact,
            });
        }

        [CardsRoot::Primary, CardsRoot::Secondary]
            .into_iter()
            .find_map(|root| {
                let rest = path.strip_prefix(root.prefix())?;
                if rest.is_empty() {
                    return Some(Route::HealthCards(root));
                }
                let category = Category::from_id(rest.strip_prefix('/')?)?;
                Some(Route::CategoryDetail(root, category))
            })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => NavRoute::Home.href().to_string(),
            Route::Team => NavRoute::Team.href().to_string(),
            Route::HealthCards(root) => root.prefix().to_string(),
            Route::CategoryDetail(root, category) => {
                format!("{}/{}", root.prefix(), category.id())
            }
            Route::Contact => NavRoute::Contact.href().to_string(),
            Route::Physicians => NavRoute::Physicians.href().to_string(),
        }
    }
}

/// Template defaults come from the canonical bundle.
struct Template<'a> {
    table: &'a ContentTable,
}

impl Template<'_> {
    fn t(&self, key: &str) -> &'static str {
        self.table.lookup(Language::ENGLISH, key).unwrap_or_default()
    }

    fn in_language(&self, language: Language, key: &str) -> &'static str {
        self.table.lookup(language, key).unwrap_or_default()
    }
}

/// Render the unlocalized markup for `route`.
pub fn build_page(route: Route, table: &ContentTable, resource_root: &Path) -> Page {
    let template = Template { table };
    let path = route.path();

    let main = match route {
        Route::Home => home(&template),
        Route::Team => team(&template),
        Route::HealthCards(root) => health_cards(&template, root),
        Route::CategoryDetail(root, category) => {
            let resources = resources_for_category(resource_root, category);
            category_detail(&template, root, category, &resources)
        }
        Route::Contact => contact(&template),
        Route::Physicians => physicians(&template),
    };

    layout(&template, &path, main)
}

/// Post-localization touches: document language and the map marker data.
pub fn finish_page(view: &mut PageView, language: Language) -> Result<()> {
    let root = view.page.root();
    let lang = if language.is_canonical() { "en" } else { "zh-Hant" };
    view.page.set_attribute(root, "lang", lang);

    if let Some(map) = &view.map {
        if let Some(script) = view.page.element_by_id("physician-markers") {
            // Keep "</" out of the script body.
            let json = map.to_json()?.replace("</", "<\\/");
            view.page.set_inner_html(script, &json);
        }
    }
    Ok(())
}

fn layout(template: &Template<'_>, path: &str, main: Vec<Element>) -> Page {
    let title = template.t("heroTitle");

    Page::from_root(
        el("html")
            .attr("lang", "en")
            .child(
                el("head")
                    .child(el("meta").attr("charset", "utf-8"))
                    .child(
                        el("meta")
                            .attr("name", "viewport")
                            .attr("content", "width=device-width, initial-scale=1.0"),
                    )
                    .child(el("title").text(title))
                    .child(
                        el("link")
                            .attr("rel", "stylesheet")
                            .attr("href", "/static/css/style.css"),
                    ),
            )
            .child(
                el("body")
                    .child(navbar(template, path))
                    .child(el("main").children(main))
                    .child(
                        el("footer")
                            .class("footer")
                            .child(el("p").class("footer-text").text(template.t("footerText"))),
                    ),
            ),
    )
}

fn navbar(template: &Template<'_>, path: &str) -> Element {
    let bundle = template.table.bundle(Language::ENGLISH);

    let links = NavRoute::ALL.into_iter().map(|route| {
        let mut link = el("a")
            .class("nav-link")
            .attr("href", route.href())
            .text(bundle.nav(route).unwrap_or_default());
        if route.href() == path {
            link = link.class("active");
        }

        if route != NavRoute::HealthCards {
            return el("li").child(link);
        }
        let items = Category::ALL.into_iter().map(|category| {
            el("li").child(
                el("a")
                    .attr("href", &format!("{}/{}", route.href(), category.id()))
                    .attr("data-dropdown-item", category.id())
                    .text(bundle.dropdown(category.id()).unwrap_or_default()),
            )
        });
        el("li")
            .class("nav-dropdown")
            .child(link)
            .child(el("ul").class("dropdown-menu").children(items))
    });

    let toggles = LanguageRegistry::get().list_all().into_iter().map(|config| {
        el("a")
            .id(config.toggle_id)
            .class("lang-btn")
            .attr("href", &format!("/set-language/{}", config.code))
            .text(config.native_name)
    });

    el("nav").class("navbar").child(
        el("div")
            .class("nav-container")
            .child(el("a").class("nav-logo").attr("href", "/").text("CHI"))
            .child(el("ul").class("nav-menu").id("navMenu").children(links))
            .child(el("div").class("language-toggle").children(toggles))
            .child(
                el("button")
                    .class("hamburger")
                    .id("hamburger")
                    .attr("aria-label", "Menu")
                    .children((0..3).map(|_| el("span").class("bar"))),
            ),
    )
}

fn page_header(title: &str, subtitle: &str) -> Element {
    el("section")
        .class("page-header")
        .child(el("h1").text(title))
        .child(el("p").text(subtitle))
}

fn help_cta(template: &Template<'_>) -> Element {
    el("section").class("cta").child(
        el("div")
            .class("cta-content")
            .child(el("h2").text(template.t("needHelpTitle")))
            .child(el("p").text(template.t("needHelpText")))
            .child(
                el("a")
                    .class("btn")
                    .attr("href", NavRoute::Contact.href())
                    .text(template.t("contactUsBtn")),
            ),
    )
}

fn home(template: &Template<'_>) -> Vec<Element> {
    let activities = [
        ("volunteerTitle", "volunteerText"),
        ("infoDeskTitle", "infoDeskText"),
        ("publicEventsTitle", "publicEventsText"),
        ("socialsTitle", "socialsText"),
    ]
    .into_iter()
    .map(|(title, text)| {
        el("div")
            .class("activity-card")
            .child(el("h3").text(template.t(title)))
            .child(el("p").text(template.t(text)))
    });

    vec![
        el("section").class("hero").child(
            el("div")
                .class("hero-content")
                .child(el("h1").class("hero-title").text(template.t("heroTitle")))
                .child(el("p").class("hero-subtitle").text(template.t("heroSubtitle")))
                .child(
                    el("div")
                        .class("hero-buttons")
                        .child(
                            el("a")
                                .class("btn")
                                .attr("href", NavRoute::Team.href())
                                .text(template.t("heroMeetTeamBtn")),
                        )
                        .child(
                            el("a")
                                .class("btn")
                                .class("btn-secondary")
                                .attr("href", NavRoute::HealthCards.href())
                                .text(template.t("heroOurResourcesBtn")),
                        ),
                ),
        ),
        el("section")
            .class("about")
            .child(el("h2").class("about-title").text(template.t("aboutTitle")))
            .child(
                el("div")
                    .class("about-intro")
                    .child(el("p").text(template.t("aboutText")))
                    .child(
                        el("a")
                            .class("btn")
                            .attr("href", NavRoute::Team.href())
                            .text(template.t("meetTeamBtn")),
                    ),
            ),
        el("section")
            .class("what-we-do")
            .child(el("h2").class("what-we-do-title").text(template.t("whatWeDoTitle")))
            .child(el("div").class("activities").children(activities)),
        el("section")
            .class("resources")
            .child(el("h2").class("resources-title").text(template.t("resourcesTitle")))
            .child(
                el("div").class("resources-cta").child(
                    el("a")
                        .class("btn")
                        .attr("href", NavRoute::HealthCards.href())
                        .text(template.t("viewResourcesBtn")),
                ),
            ),
        el("section")
            .class("cta")
            .child(el("h2").class("contact-title").text(template.t("homeContactTitle")))
            .child(
                el("div")
                    .class("cta-content")
                    .child(el("p").text(template.t("contactText")))
                    .child(
                        el("a")
                            .class("social-link")
                            .attr("href", INSTAGRAM_URL)
                            .raw("<span>📷</span> ")
                            .text(template.t("followUsText")),
                    ),
            ),
    ]
}

fn team(template: &Template<'_>) -> Vec<Element> {
    vec![
        page_header(template.t("teamTitle"), template.t("teamSubtitle")),
        el("section")
            .class("content-section")
            .child(el("p").text(template.t("teamDescription")))
            .child(
                el("div")
                    .class("team-note")
                    .child(el("p").text(template.t("teamFunFact"))),
            ),
        el("section")
            .class("join-team")
            .child(el("h2").text(template.t("joinTeamTitle")))
            .child(el("p").text(template.t("joinTeamText"))),
    ]
}

fn contact(template: &Template<'_>) -> Vec<Element> {
    let field = |id: &str, label_key: &str, input: Element| {
        el("div")
            .class("form-group")
            .child(el("label").attr("for", id).text(template.t(label_key)))
            .child(input.id(id).attr("name", id))
    };

    vec![
        page_header(template.t("contactTitle"), template.t("contactSubtitle")),
        el("section")
            .class("contact")
            .child(
                el("div")
                    .class("contact-info")
                    .child(el("p").text(template.t("contactDescription"))),
            )
            .child(
                el("div")
                    .class("contact-form")
                    .child(el("h3").text(template.t("contactFormTitle")))
                    .child(
                        el("form")
                            .attr("action", "#")
                            .child(field("name", "formNameLabel", el("input").attr("type", "text")))
                            .child(field("email", "formEmailLabel", el("input").attr("type", "email")))
                            .child(field("message", "formMessageLabel", el("textarea").attr("rows", "5")))
                            .child(
                                el("button")
                                    .class("btn")
                                    .attr("type", "submit")
                                    .text(template.t("formSubmitBtn")),
                            ),
                    ),
            ),
    ]
}

/// Card title in the root's own language, subtitle in the other one.
fn category_labels(
    template: &Template<'_>,
    root: CardsRoot,
    category: Category,
) -> (&'static str, &'static str) {
    let key = category.content_key();
    let (title_language, subtitle_language) = match root {
        CardsRoot::Primary => (Language::ENGLISH, Language::CHINESE),
        CardsRoot::Secondary => (Language::CHINESE, Language::ENGLISH),
    };
    (
        template.in_language(title_language, key),
        template.in_language(subtitle_language, key),
    )
}

fn health_cards(template: &Template<'_>, root: CardsRoot) -> Vec<Element> {
    let cards = Category::ALL.into_iter().map(|category| {
        let (title, subtitle) = category_labels(template, root, category);
        el("a")
            .class("category-card")
            .attr("href", &format!("{}/{}", root.prefix(), category.id()))
            .attr("data-category-id", category.id())
            .child(el("h3").class("category-title").text(title))
            .child(el("p").class("category-subtitle").text(subtitle))
    });

    vec![
        page_header(template.t("healthCardsTitle"), template.t("healthCardsSubtitle")),
        el("section")
            .class("content-section")
            .child(
                el("div")
                    .class("intro-text")
                    .child(el("p").text(template.t("healthCardsDescription")))
                    .child(el("p").text(template.t("healthCardsNote"))),
            )
            .child(el("div").class("category-grid").children(cards)),
        help_cta(template),
    ]
}

fn category_detail(
    template: &Template<'_>,
    root: CardsRoot,
    category: Category,
    resources: &[Resource],
) -> Vec<Element> {
    let (title, subtitle) = category_labels(template, root, category);

    let listing = if resources.is_empty() {
        el("p").class("resources-empty").text(template.t("resourcesEmpty"))
    } else {
        el("ul").class("resource-list").children(resources.iter().map(|resource| {
            let href = format!("/static/{}", resource.path);
            let mut item = el("li")
                .class("resource-item")
                .child(el("a").class("resource-title").attr("href", &href).text(&resource.title));
            if let (Some(en), Some(zh)) = (resource.language_label_en, resource.language_label_zh) {
                item = item.child(
                    el("span")
                        .class("resource-language")
                        .attr("data-label-en", en)
                        .attr("data-label-zh", zh)
                        .text(en),
                );
            }
            item.child(
                el("a")
                    .class("resource-download")
                    .attr("href", &href)
                    .attr("download", "")
                    .text(template.t("downloadLabel")),
            )
        }))
    };

    vec![
        el("section")
            .class("category-header")
            .attr("data-category-id", category.id())
            .child(el("h1").class("category-title").text(title))
            .child(el("p").class("category-subtitle").text(subtitle)),
        el("section").class("content-section").child(listing),
        help_cta(template),
    ]
}

fn physicians(template: &Template<'_>) -> Vec<Element> {
    vec![
        page_header(template.t("physiciansTitle"), template.t("physiciansSubtitle")),
        el("section")
            .class("physicians-intro")
            .child(el("p").text(template.t("physiciansDescription"))),
        el("section")
            .class("map-section")
            .child(el("div").id("physician-map").class("physician-map"))
            .child(el("p").class("map-note").text(template.t("physiciansMapNote")))
            .child(
                el("script")
                    .id("physician-markers")
                    .attr("type", "application/json")
                    .raw("[]"),
            ),
    ]
}
