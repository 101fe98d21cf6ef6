//! Session backend configuration.
//!
//! The auth and REST services usually share one host, but are configured
//! separately so either can be pointed at a mock.

use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

use crate::retry::RetryPolicy;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the auth and profile services.
///
/// Custom `Debug` implementation redacts `api_key`.
#[derive(Clone)]
pub struct SessionConfig {
    /// Base URL of the auth service (`/auth/v1/...`).
    pub auth_url: Url,
    /// Base URL of the REST service (`/rest/v1/...`).
    pub rest_url: Url,
    /// Project API key, sent as the `apikey` header on every request.
    pub api_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for transport failures and gateway statuses.
    pub retry: RetryPolicy,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("auth_url", &self.auth_url)
            .field("rest_url", &self.rest_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `BARN_AUTH_URL` (default: `http://127.0.0.1:54321`)
    /// - `BARN_REST_URL` (default: the auth URL)
    /// - `BARN_API_KEY` (required)
    /// - `BARN_TIMEOUT_SECS` (default: 30)
    /// - `BARN_MAX_RETRIES` (default: 2)
    /// - `BARN_RETRY_BASE_MS` (default: 250)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("BARN_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let auth_url = lookup_url(&lookup, "BARN_AUTH_URL", DEFAULT_BASE_URL)?;
        let rest_url = lookup_url(&lookup, "BARN_REST_URL", auth_url.as_str())?;

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_retries: lookup_number(&lookup, "BARN_MAX_RETRIES")?
                .unwrap_or(defaults.max_retries),
            base_delay: lookup_number(&lookup, "BARN_RETRY_BASE_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.base_delay),
        };

        Ok(Self {
            auth_url,
            rest_url,
            api_key: Zeroizing::new(api_key),
            timeout_secs: lookup_number(&lookup, "BARN_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            retry,
        })
    }

    /// Configuration with both services on one local mock server.
    ///
    /// Retries back off from 5 ms.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base` does not parse.
    pub fn local_mock(base: &str, api_key: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base)
            .map_err(|e| ConfigError::InvalidUrl("local_mock".to_string(), e.to_string()))?;
        Ok(Self {
            auth_url: url.clone(),
            rest_url: url,
            api_key: Zeroizing::new(api_key.to_string()),
            timeout_secs: 5,
            retry: RetryPolicy {
                max_retries: 2,
                base_delay: Duration::from_millis(5),
            },
        })
    }
}

fn lookup_url(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: &str,
) -> Result<Url, ConfigError> {
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn lookup_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(var)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
        })
        .transpose()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BARN_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}
