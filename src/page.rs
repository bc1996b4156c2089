//! Route classification.
//!
//! Every synchronization pass classifies the current path from scratch; the
//! result is never cached.

use crate::i18n::Language;

/// Links in the primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavRoute {
    Home,
    Team,
    HealthCards,
    Physicians,
    Contact,
}

impl NavRoute {
    pub const ALL: [NavRoute; 5] = [
        NavRoute::Home,
        NavRoute::Team,
        NavRoute::HealthCards,
        NavRoute::Physicians,
        NavRoute::Contact,
    ];

    pub fn href(&self) -> &'static str {
        match self {
            NavRoute::Home => "/",
            NavRoute::Team => "/team",
            NavRoute::HealthCards => "/health-cards",
            NavRoute::Physicians => "/physicians",
            NavRoute::Contact => "/contact",
        }
    }

    /// Exact match only: `/team/` or `/team?x` are not navigation routes.
    pub fn from_href(href: &str) -> Option<NavRoute> {
        NavRoute::ALL.into_iter().find(|route| route.href() == href)
    }
}

/// The two presentations of the health-card listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardsRoot {
    /// `/health-cards…`, titles rendered in English
    Primary,
    /// `/resources-zh…`, the mirrored Chinese presentation
    Secondary,
}

impl CardsRoot {
    pub fn prefix(&self) -> &'static str {
        match self {
            CardsRoot::Primary => "/health-cards",
            CardsRoot::Secondary => "/resources-zh",
        }
    }

    /// The root a reader of `language` is sent to.
    pub fn for_language(language: Language) -> CardsRoot {
        if language.is_canonical() {
            CardsRoot::Primary
        } else {
            CardsRoot::Secondary
        }
    }

    fn other(&self) -> CardsRoot {
        match self {
            CardsRoot::Primary => CardsRoot::Secondary,
            CardsRoot::Secondary => CardsRoot::Primary,
        }
    }
}

/// Which kind of page a path shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIdentity {
    Home,
    Team,
    HealthCards(CardsRoot),
    Contact,
    Physicians,
    None,
}

impl PageIdentity {
    pub fn classify(path: &str) -> PageIdentity {
        match path {
            "/" => PageIdentity::Home,
            "/team" => PageIdentity::Team,
            "/contact" => PageIdentity::Contact,
            "/physicians" => PageIdentity::Physicians,
            _ if path.starts_with(CardsRoot::Primary.prefix()) => {
                PageIdentity::HealthCards(CardsRoot::Primary)
            }
            _ if path.starts_with(CardsRoot::Secondary.prefix()) => {
                PageIdentity::HealthCards(CardsRoot::Secondary)
            }
            _ => PageIdentity::None,
        }
    }
}

/// Where the reader goes after switching to `target` while viewing `path`.
///
/// Only health-card routes under the other language's root redirect. The first
/// segment after the root (the category) is carried over; anything deeper is
/// dropped.
pub fn equivalent_route(path: &str, target: Language) -> Option<String> {
    let to = CardsRoot::for_language(target);
    let from = to.other();

    if path == from.prefix() {
        return Some(to.prefix().to_string());
    }

    let rest = path.strip_prefix(from.prefix())?.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    Some(format!("{}/{}", to.prefix(), segment))
}
