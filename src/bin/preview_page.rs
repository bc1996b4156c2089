//! Preview binary - renders one page the way a reader's client would see it
//!
//! Usage:
//!   cargo run --bin preview -- /team                 # Render with the stored language
//!   cargo run --bin preview -- /health-cards --lang zh
//!   cargo run --bin preview -- /contact --lang zh --no-notify
//!
//! The stored preference lives in PREFERENCES_FILE (defaults to
//! data/preferences.json). Selecting a language persists it there and notifies
//! the server at SITE_URL unless --no-notify is given.

use anyhow::{Context, Result};
use chinatown_health_site::{
    config::Config,
    i18n::{ContentTable, SyncMetrics},
    notify::LanguageNotifier,
    physicians::{self, PhysicianMap},
    preference::FileStore,
    session::{LanguageSession, PageView},
    site::{self, Route},
    sync::Synchronizer,
};
use tracing::{info, warn};

struct PreviewArgs {
    path: String,
    language: Option<String>,
    notify: bool,
}

impl PreviewArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut path = None;
        let mut language = None;
        let mut notify = true;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--lang" => {
                    language = Some(iter.next().context("--lang needs a language code")?.clone());
                }
                "--no-notify" => notify = false,
                other if other.starts_with("--") => anyhow::bail!("Unknown option: {}", other),
                other => path = Some(other.to_string()),
            }
        }

        Ok(Self {
            path: path.unwrap_or_else(|| "/".to_string()),
            language,
            notify,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chinatown_health_site=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = PreviewArgs::parse(&args)?;

    info!("Loading configuration...");
    let config = Config::from_env()?;

    let route = Route::resolve(&args.path)
        .with_context(|| format!("No page is served at {}", args.path))?;
    let physicians = physicians::load_physicians(&config.physicians_file)?;

    let table = ContentTable::builtin();
    let sync = Synchronizer::new(table, &physicians);

    let page = site::build_page(route, table, &config.resource_root);
    let mut view = PageView::new(page, &route.path());
    if route == Route::Physicians {
        view = view.with_map(PhysicianMap::new());
    }

    let mut session = LanguageSession::initialize(FileStore::new(&config.preferences_file));
    if args.notify {
        session = session.with_notifier(LanguageNotifier::new(&config.site_url)?);
    }

    let report = session.load(&sync, &mut view);
    info!(
        "Loaded {} in {} ({} slots written, {} skipped)",
        view.path,
        session.current(),
        report.slots_written,
        report.slots_skipped
    );

    let mut redirect = None;
    if let Some(code) = &args.language {
        let change = session.select_code(code, &sync, &mut view)?;
        redirect = change.redirect;

        if let Some(notification) = change.notification {
            if let Err(e) = notification.await {
                warn!("Language notification task failed: {}", e);
            }
        }
    }

    site::finish_page(&mut view, session.current())?;

    println!("{}", view.page.to_html());

    if let Some(target) = redirect {
        println!("\n========== REDIRECT ==========");
        println!("{}", target);
        println!("==============================\n");
    }

    let metrics = SyncMetrics::global().report();
    info!("Metrics: {}", serde_json::to_string(&metrics)?);

    Ok(())
}
