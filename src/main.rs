use anyhow::Result;
use chinatown_health_site::{
    config::Config,
    i18n::{BundleValidator, ContentTable},
    physicians, server,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chinatown_health_site=info".parse()?),
        )
        .init();

    info!("Starting Chinatown Health Initiative site");

    let config = Config::from_env()?;
    info!("Environment: {}", config.environment);

    // Content table problems leave slots in the template language, but the
    // site still works, so they are logged rather than fatal.
    let report = BundleValidator::validate(ContentTable::builtin());
    for problem in &report.errors {
        error!("Content table: {}", problem);
    }
    for problem in &report.warnings {
        warn!("Content table: {}", problem);
    }
    if report.is_clean() {
        info!("Content table validated");
    }

    let physicians = physicians::load_physicians(&config.physicians_file)?;

    server::serve(config, physicians).await
}
