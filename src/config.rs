//! Application configuration loaded from environment variables.
//!
//! Everything has a development-friendly default; the only way to get a
//! startup error is an unparseable value.

use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Deployment environment, reported on every outbound webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Outbound webhook endpoint; `None` disables notifications entirely
    pub webhook_url: Option<String>,
    /// production | development
    pub environment: Environment,
    /// Directory holding the JSON record files
    pub data_dir: PathBuf,
    /// Public app URL used in share payloads
    pub app_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            webhook_url: None,
            environment: Environment::Development,
            data_dir: PathBuf::from("data"),
            app_url: "https://bolandindex.app".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present. `WEBHOOK_URL` is optional; leaving
    /// it unset (or empty) disables the notifier.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let environment = match env::var("APP_ENV") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "production" => Environment::Production,
                "development" => Environment::Development,
                other => return Err(ConfigError::Invalid("APP_ENV", other.to_string())),
            },
            Err(_) => Environment::Development,
        };

        Ok(Self {
            webhook_url: env::var("WEBHOOK_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            environment,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            app_url: env::var("APP_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| "https://bolandindex.app".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
