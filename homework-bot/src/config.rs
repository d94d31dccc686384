//! Bot configuration
//!
//! Credentials for both services plus the polling and network tunables.
//! Everything comes from environment variables; a `.env` file is loaded
//! into the environment by `main` before this runs.

use homework_client::{DEFAULT_API_URL, DEFAULT_ENDPOINT};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required credentials are absent or empty
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Bot API token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework status endpoint URL
    pub practicum_endpoint: String,

    /// Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub retry_period: Duration,

    /// Upper bound on any single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults for everything but credentials
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            retry_period: DEFAULT_RETRY_PERIOD,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// All missing credentials are reported together, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let practicum_token = credential(PRACTICUM_TOKEN);
        let telegram_token = credential(TELEGRAM_TOKEN);
        let telegram_chat_id = credential(TELEGRAM_CHAT_ID);

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(p), Some(t), Some(c)) => (p, t, c),
                (p, t, c) => {
                    let missing = [
                        (PRACTICUM_TOKEN, p.is_none()),
                        (TELEGRAM_TOKEN, t.is_none()),
                        (TELEGRAM_CHAT_ID, c.is_none()),
                    ]
                    .into_iter()
                    .filter_map(|(key, absent)| absent.then_some(key))
                    .collect();
                    return Err(ConfigError::MissingCredentials(missing));
                }
            };

        let seconds = |key: &str, default: Duration| match lookup(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
                    default
                }
            },
        };

        let url = |key: &str, default: &str| match lookup(key) {
            None => default.to_string(),
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => raw,
            Some(raw) => {
                warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
                default.to_string()
            }
        };

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);
        config.practicum_endpoint = url("PRACTICUM_ENDPOINT", DEFAULT_ENDPOINT);
        config.telegram_api_url = url("TELEGRAM_API_URL", DEFAULT_API_URL);
        config.retry_period = seconds("RETRY_PERIOD", DEFAULT_RETRY_PERIOD);
        config.request_timeout = seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT);

        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
