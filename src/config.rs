//! Client configuration.
//!
//! Everything the client needs is bound once at construction; nothing is read
//! from ambient state afterwards.

use crate::resilience::PollPolicy;
use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://humanize.undetectable.ai";
pub const DEFAULT_MODEL: &str = "v11";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection and polling settings for [`HumanizerClient`](crate::HumanizerClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizerConfig {
    pub base_url: String,
    pub api_key: String,
    /// Model identifier attached to every submission.
    pub model: String,
    /// Per-request transport timeout, independent of the poll budget.
    pub request_timeout: Duration,
    pub poll: PollPolicy,
}

impl HumanizerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll: PollPolicy::default(),
        }
    }

    /// Build from environment variables.
    ///
    /// - `HUMANIZER_API_KEY` (required)
    /// - `HUMANIZER_BASE_URL` (default `https://humanize.undetectable.ai`)
    /// - `HUMANIZER_MODEL` (default `v11`)
    /// - `HUMANIZER_TIMEOUT_SECS` (default 60)
    /// - `HUMANIZER_POLL_ATTEMPTS` (default 15)
    /// - `HUMANIZER_POLL_INTERVAL_MS` (default 3000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HUMANIZER_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("HUMANIZER_API_KEY")
                        .with_source("config"),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup("HUMANIZER_BASE_URL") {
            config.base_url = url;
        }
        if let Some(model) = lookup("HUMANIZER_MODEL") {
            config.model = model;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "HUMANIZER_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(attempts) = parse_var::<u32>(&lookup, "HUMANIZER_POLL_ATTEMPTS")? {
            config.poll = config.poll.with_max_attempts(attempts);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "HUMANIZER_POLL_INTERVAL_MS")? {
            config.poll = config.poll.with_interval(Duration::from_millis(ms));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// Check the settings that would otherwise only fail on first use.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new()
                    .with_field_path("config.api_key")
                    .with_source("config"),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Model identifier must not be empty",
                ErrorContext::new()
                    .with_field_path("config.model")
                    .with_source("config"),
            ));
        }
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("config"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Unsupported URL scheme: {}", url.scheme()),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            Error::configuration_with_context(
                "Environment variable is not a valid number",
                ErrorContext::new()
                    .with_field_path(key)
                    .with_details(raw.clone())
                    .with_source("config"),
            )
        }),
    }
}
