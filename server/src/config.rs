use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use scraper::{FileScraper, HttpScraper, JobScraper};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("either JOBSPY_FIXTURE_PATH or JOBSPY_BACKEND_URL must be set")]
    MissingBackend,
}

/// Where raw job rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    Http { base_url: String, timeout: Duration },
    File { path: PathBuf },
}

impl BackendConfig {
    pub fn build(&self) -> scraper::Result<Arc<dyn JobScraper>> {
        match self {
            BackendConfig::Http { base_url, timeout } => {
                Ok(Arc::new(HttpScraper::new(base_url.clone(), *timeout)?))
            }
            BackendConfig::File { path } => Ok(Arc::new(FileScraper::new(path.clone()))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend: BackendConfig,
    pub environment: String,
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_number(&lookup, "SCRAPE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let backend = match (lookup("JOBSPY_FIXTURE_PATH"), lookup("JOBSPY_BACKEND_URL")) {
            (Some(path), _) => BackendConfig::File { path: path.into() },
            (None, Some(base_url)) => BackendConfig::Http {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            (None, None) => return Err(ConfigError::MissingBackend),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            backend,
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            json_logs: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
