use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::debug;
use url::Url;

use crate::models::theme::ColorScheme;
use crate::services::news::DEFAULT_GNEWS_BASE_URL;
use crate::ui::screens::auth::DEFAULT_LOGIN_SUCCESS_DELAY;
use crate::ui::screens::splash::DEFAULT_SPLASH_DELAY;

pub const DEFAULT_DATABASE_PATH: &str = "data/mikedaily.db";

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gnews_api_key: Option<String>,
    pub gnews_base_url: Url,
    pub backend_url: Option<Url>,
    pub database_path: PathBuf,
    /// Platform light/dark signal; unset means the platform doesn't report one
    pub appearance: Option<ColorScheme>,
    pub splash_delay: Duration,
    pub login_success_delay: Duration,
}

impl AppConfig {
    /// Loads `.env` if there is one, then reads the process environment
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let gnews_base_url = match get(&["GNEWS_BASE_URL"]) {
            Some(raw) => Url::parse(&raw).with_context(|| format!("Invalid GNEWS_BASE_URL: {}", raw))?,
            None => Url::parse(DEFAULT_GNEWS_BASE_URL)?,
        };

        let backend_url = get(&["BACKEND_URL", "EXPO_PUBLIC_BACKEND_URL"])
            .map(|raw| Url::parse(&raw).with_context(|| format!("Invalid BACKEND_URL: {}", raw)))
            .transpose()?;

        let appearance = get(&["MIKEDAILY_APPEARANCE"])
            .map(|raw| raw.parse::<ColorScheme>())
            .transpose()
            .context("Invalid MIKEDAILY_APPEARANCE")?;

        let millis = |key: &str, default: Duration| -> Result<Duration> {
            match get(&[key]) {
                Some(raw) => raw
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("Invalid {}: {}", key, raw)),
                None => Ok(default),
            }
        };

        Ok(Self {
            gnews_api_key: get(&["GNEWS_API_KEY", "EXPO_PUBLIC_GNEWS_API_KEY"]),
            gnews_base_url,
            backend_url,
            database_path: get(&["MIKEDAILY_DB"])
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            appearance,
            splash_delay: millis("MIKEDAILY_SPLASH_MS", DEFAULT_SPLASH_DELAY)?,
            login_success_delay: millis("MIKEDAILY_LOGIN_DELAY_MS", DEFAULT_LOGIN_SUCCESS_DELAY)?,
        })
    }

    pub fn require_news_key(&self) -> Result<&str> {
        self.gnews_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GNEWS_API_KEY is not set"))
    }

    pub fn require_backend(&self) -> Result<&Url> {
        self.backend_url
            .as_ref()
            .ok_or_else(|| anyhow!("BACKEND_URL is not set"))
    }
}
