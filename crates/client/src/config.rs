//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STELLAR_BASE_URL` - Backend base URL
//!   (default: `https://stellarburgers.nomoreparties.site`)
//! - `STELLAR_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend connection configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration pointing at `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables, falling back to the
    /// public backend defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `STELLAR_BASE_URL` is not a
    /// valid URL or `STELLAR_TIMEOUT_SECS` is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match std::env::var("STELLAR_BASE_URL") {
            Ok(raw) => Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("STELLAR_BASE_URL".into(), e.to_string()))?,
            Err(_) => default_base_url(),
        };

        let timeout_secs = match std::env::var("STELLAR_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("STELLAR_TIMEOUT_SECS".into(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

fn default_base_url() -> Url {
    // The constant is a valid absolute URL; parsing cannot fail.
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
