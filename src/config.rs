use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,

    // Server
    pub host: String,
    pub port: u16,

    // Content
    pub static_dir: PathBuf,
    pub resource_root: PathBuf,
    pub physicians_file: PathBuf,

    // Client tooling (preview binary)
    pub site_url: String,
    pub preferences_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let static_dir = PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        );

        Ok(Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid port number")?,
                Err(_) => 5001,
            },

            resource_root: std::env::var("RESOURCE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| static_dir.join("resources")),
            static_dir,
            physicians_file: std::env::var("PHYSICIANS_FILE")
                .unwrap_or_else(|_| "data/physicians.json".to_string())
                .into(),

            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5001".to_string()),
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string())
                .into(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "ENVIRONMENT",
        "HOST",
        "PORT",
        "STATIC_DIR",
        "RESOURCE_ROOT",
        "PHYSICIANS_FILE",
        "SITE_URL",
        "PREFERENCES_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 5001);
        assert_eq!(config.bind_address(), "0.0.0.0:5001");
        assert_eq!(config.resource_root, PathBuf::from("static/resources"));
        assert_eq!(config.physicians_file, PathBuf::from("data/physicians.json"));
        assert!(!config.is_production());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("STATIC_DIR", "/srv/site");
        std::env::set_var("ENVIRONMENT", "production");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.resource_root, PathBuf::from("/srv/site/resources"));
        assert!(config.is_production());
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        clear_env();

        assert!(err.to_string().contains("PORT must be a valid port number"));
    }
}
