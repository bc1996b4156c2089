//! Advisory language notification.
//!
//! After a language change the client tells the server with
//! `GET /set-language/{code}` so the server-rendered pages follow along. The
//! request is fire-and-forget: the locally applied language is authoritative,
//! so failures are logged and counted but never retried or surfaced.

use crate::i18n::{Language, SyncMetrics};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LanguageNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl LanguageNotifier {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, language: Language) -> String {
        format!("{}/set-language/{}", self.base_url, language.code())
    }

    /// Send the notification and wait for it. The response status is ignored;
    /// only transport failures are errors.
    pub async fn send(&self, language: Language) -> Result<()> {
        let url = self.url_for(language);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        debug!("Language notification {} answered {}", url, response.status());
        Ok(())
    }

    /// Spawn the notification on the current tokio runtime.
    ///
    /// Returns the task handle, or `None` when no runtime is available (the
    /// notification is then skipped).
    pub fn notify(&self, language: Language) -> Option<JoinHandle<()>> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, skipping language notification for {}", language);
            return None;
        };

        let notifier = self.clone();
        Some(handle.spawn(async move {
            match notifier.send(language).await {
                Ok(()) => SyncMetrics::global().record_notification_sent(),
                Err(e) => {
                    SyncMetrics::global().record_notification_failure();
                    warn!("Error setting language: {:#}", e);
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let notifier = LanguageNotifier::new("http://localhost:5001/").unwrap();
        assert_eq!(
            notifier.url_for(Language::CHINESE),
            "http://localhost:5001/set-language/zh"
        );
    }

    #[tokio::test]
    async fn test_send_hits_set_language_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/set-language/zh"))
            .respond_with(ResponseTemplate::new(303).insert_header("Location", "/"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let notifier = LanguageNotifier::new(&mock_server.uri()).unwrap();
        notifier.send(Language::CHINESE).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_ignores_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/set-language/en"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let notifier = LanguageNotifier::new(&mock_server.uri()).unwrap();
        assert!(notifier.send(Language::ENGLISH).await.is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn test_notify_failure_is_swallowed() {
        SyncMetrics::global().reset();
        // Nothing listens on port 9 (discard) in the test environment.
        let notifier = LanguageNotifier::new("http://127.0.0.1:9").unwrap();

        let handle = notifier.notify(Language::CHINESE).unwrap();
        handle.await.unwrap();

        assert_eq!(SyncMetrics::global().notification_failures(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_notify_success_is_counted() {
        SyncMetrics::global().reset();
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/set-language/zh"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let notifier = LanguageNotifier::new(&mock_server.uri()).unwrap();
        notifier.notify(Language::CHINESE).unwrap().await.unwrap();

        assert_eq!(SyncMetrics::global().notifications_sent(), 1);
    }

    #[test]
    fn test_notify_without_runtime_is_skipped() {
        let notifier = LanguageNotifier::new("http://127.0.0.1:9").unwrap();
        assert!(notifier.notify(Language::ENGLISH).is_none());
    }
}
