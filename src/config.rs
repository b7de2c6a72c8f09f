use std::time::Duration;

use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use bon::Builder;
use secrecy::SecretString;

use crate::error::Error;
use crate::{ACCESS_TOKEN_VAR, Result};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_INITIAL_BACKOFF_DURATION: Duration = Duration::from_millis(500);
const DEFAULT_MAX_BACKOFF_DURATION: Duration = Duration::from_secs(5);
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Configuration shared by the resource clients.
///
/// # Example
///
/// ```
/// use gocardless_client_sdk::{Config, RetryConfig};
///
/// let config = Config::builder()
///     .access_token("live_xxx".to_owned())
///     .retry(RetryConfig::none())
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct Config {
    /// Access token sent as a bearer token with every request.
    #[builder(into)]
    access_token: SecretString,
    #[builder(default)]
    retry: RetryConfig,
    /// When a creation request hits an idempotent creation conflict, return the error instead of
    /// fetching the resource the earlier request created.
    #[builder(default)]
    raise_on_idempotency_conflict: bool,
}

impl Config {
    /// Builds a default configuration with the access token read from
    /// [`ACCESS_TOKEN_VAR`](crate::ACCESS_TOKEN_VAR).
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_VAR)
            .map_err(|e| Error::validation(format!("{ACCESS_TOKEN_VAR}: {e}")))?;

        Ok(Self::builder().access_token(token).build())
    }

    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    #[must_use]
    pub fn raise_on_idempotency_conflict(&self) -> bool {
        self.raise_on_idempotency_conflict
    }
}

/// Retry behaviour for transient failures (connection errors and 500/502/503/504 responses).
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts per request, including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Maximum delay between retries
    pub max_backoff: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: DEFAULT_INITIAL_BACKOFF_DURATION,
            max_backoff: DEFAULT_MAX_BACKOFF_DURATION,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Retries up to `max_attempts` total attempts with a fixed `delay` between them.
    #[must_use]
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff: delay,
            max_backoff: delay,
            backoff_multiplier: 1.0,
        }
    }
}

impl From<RetryConfig> for ExponentialBackoff {
    fn from(config: RetryConfig) -> Self {
        ExponentialBackoffBuilder::default()
            .with_initial_interval(config.initial_backoff)
            .with_max_interval(config.max_backoff)
            .with_multiplier(config.backoff_multiplier)
            .with_randomization_factor(0.0)
            .with_max_elapsed_time(None) // Attempts are counted separately
            .build()
    }
}
