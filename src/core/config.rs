//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default upper bound for a proxied API call
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    InvalidBackendUrl(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend API that `/api/*` is forwarded to
    /// Example: http://127.0.0.1:8000
    pub backend_url: Option<String>,

    /// Timeout for a single proxied request
    pub proxy_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if let Some(url) = &backend_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidBackendUrl(url.clone()));
            }
        }

        let proxy_timeout = match lookup("API_PROXY_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: "API_PROXY_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            backend_url,
            proxy_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }
}
