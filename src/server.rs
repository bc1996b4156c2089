//! HTTP server.
//!
//! Every page is rendered from its template and then localized with the
//! language stored in the `language` cookie, so the server output matches what
//! the client-side synchronizer would produce.

use crate::category::Category;
use crate::config::Config;
use crate::i18n::{ContentTable, Language, MetricsReport, SyncMetrics};
use crate::page::{equivalent_route, CardsRoot};
use crate::physicians::{Physician, PhysicianMap};
use crate::preference::LANGUAGE_KEY;
use crate::session::PageView;
use crate::site::{self, Route};
use crate::sync::Synchronizer;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info, warn};

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub table: &'static ContentTable,
    pub physicians: Arc<Vec<Physician>>,
}

impl AppState {
    pub fn new(config: Config, physicians: Vec<Physician>) -> Self {
        Self {
            config: Arc::new(config),
            table: ContentTable::builtin(),
            physicians: Arc::new(physicians),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home))
        .route("/team", get(team))
        .route("/health-cards", get(health_cards))
        .route("/health-cards/:category", get(health_card_category))
        .route("/resources-zh", get(resources_zh))
        .route("/resources-zh/:category", get(resources_zh_category))
        .route("/contact", get(contact))
        .route("/physicians", get(physicians))
        .route("/set-language/:code", get(set_language))
        .route("/metrics", get(metrics))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: Config, physicians: Vec<Physician>) -> Result<()> {
    let address = config.bind_address();
    let app = router(AppState::new(config, physicians));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

// ==================== Pages ====================

async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::Home)
}

async fn team(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::Team)
}

async fn health_cards(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::HealthCards(CardsRoot::Primary))
}

async fn health_card_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Response {
    render_category(&state, &headers, CardsRoot::Primary, &category)
}

async fn resources_zh(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::HealthCards(CardsRoot::Secondary))
}

async fn resources_zh_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Response {
    render_category(&state, &headers, CardsRoot::Secondary, &category)
}

async fn contact(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::Contact)
}

async fn physicians(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, Route::Physicians)
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Page not found").into_response()
}

fn render_category(state: &AppState, headers: &HeaderMap, root: CardsRoot, id: &str) -> Response {
    match Category::from_id(id) {
        Some(category) => render(state, headers, Route::CategoryDetail(root, category)),
        None => {
            debug!("Unknown category requested: {}", id);
            (StatusCode::NOT_FOUND, "Category not found").into_response()
        }
    }
}

fn render(state: &AppState, headers: &HeaderMap, route: Route) -> Response {
    let language = language_from_cookies(headers);
    let path = route.path();

    let page = site::build_page(route, state.table, &state.config.resource_root);
    let mut view = PageView::new(page, &path);
    if route == Route::Physicians {
        view = view.with_map(PhysicianMap::new());
    }

    let sync = Synchronizer::new(state.table, &state.physicians);
    view.synchronize(&sync, language);

    match site::finish_page(&mut view, language) {
        Ok(()) => Html(view.page.to_html()).into_response(),
        Err(e) => {
            error!("Failed to render {}: {:#}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

// ==================== Language ====================

/// Store the language in a cookie and send the reader back where they came
/// from. Health-card pages bounce to the other root's equivalent page.
/// Unknown codes leave the cookie alone.
async fn set_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .map(referer_path)
        .unwrap_or_else(|| "/".to_string());

    match Language::from_code(&code) {
        Ok(language) => {
            let route = back.split(['?', '#']).next().unwrap_or("/");
            let target = equivalent_route(route, language).unwrap_or_else(|| back.clone());
            info!("Language set to {}, redirecting to {}", language, target);

            let cookie = language_cookie(language, state.config.is_production());
            ([(header::SET_COOKIE, cookie)], Redirect::to(&target)).into_response()
        }
        Err(e) => {
            warn!("Ignoring language selection: {}", e);
            Redirect::to(&back).into_response()
        }
    }
}

async fn metrics() -> Json<MetricsReport> {
    Json(SyncMetrics::global().report())
}

/// Language from the `language` cookie; canonical when absent or unknown.
pub fn language_from_cookies(headers: &HeaderMap) -> Language {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANGUAGE_KEY)
        .and_then(|(_, value)| Language::from_code(value.trim()).ok())
        .unwrap_or_default()
}

pub fn language_cookie(language: Language, secure: bool) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}",
        LANGUAGE_KEY,
        language.code(),
        COOKIE_MAX_AGE_SECS,
        if secure { "; Secure" } else { "" }
    )
}

/// Local path and query of a Referer value. Anything that does not resolve to
/// a path on this site becomes `/`.
pub fn referer_path(referer: &str) -> String {
    let path = match referer.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => referer,
    };

    // Browsers read `\` as `/`, so `/\host` is as foreign as `//host`.
    let local = path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control);

    if local {
        path.to_string()
    } else {
        "/".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_language_from_cookies() {
        let headers = headers_with_cookie("theme=dark; language=zh");
        assert_eq!(language_from_cookies(&headers), Language::CHINESE);
    }

    #[test]
    fn test_language_from_cookies_defaults() {
        assert_eq!(language_from_cookies(&HeaderMap::new()), Language::ENGLISH);
        let headers = headers_with_cookie("language=fr");
        assert_eq!(language_from_cookies(&headers), Language::ENGLISH);
    }

    #[test]
    fn test_language_cookie() {
        assert_eq!(
            language_cookie(Language::CHINESE, false),
            "language=zh; Path=/; Max-Age=31536000; SameSite=Lax"
        );
        assert!(language_cookie(Language::ENGLISH, true).ends_with("; Secure"));
    }

    #[test]
    fn test_referer_path() {
        assert_eq!(referer_path("http://localhost:5001/team"), "/team");
        assert_eq!(referer_path("https://example.org/health-cards/cancer?x=1"), "/health-cards/cancer?x=1");
        assert_eq!(referer_path("https://example.org"), "/");
        assert_eq!(referer_path("/contact"), "/contact");
    }

    #[test]
    fn test_referer_path_rejects_foreign_forms() {
        assert_eq!(referer_path("//evil.example/path"), "/");
        assert_eq!(referer_path("javascript:alert(1)"), "/");
        assert_eq!(referer_path(""), "/");
    }

    #[test]
    fn test_referer_path_rejects_backslash_and_control_chars() {
        assert_eq!(referer_path("https://evil.example/\\evil.example/x"), "/");
        assert_eq!(referer_path("/\\evil.example"), "/");
        assert_eq!(referer_path("http://localhost/team\\x"), "/");
        assert_eq!(referer_path("http://localhost/team\r\nLocation: //evil"), "/");
        assert_eq!(referer_path("/contact\t"), "/");
    }
}
