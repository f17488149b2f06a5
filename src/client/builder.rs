use crate::client::core::HumanizerClient;
use crate::config::HumanizerConfig;
use crate::fallback::{FallbackTransformer, RandomSource};
use crate::resilience::PollPolicy;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct HumanizerClientBuilder {
    config: Option<HumanizerConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    request_timeout: Option<Duration>,
    poll: Option<PollPolicy>,
    random: Option<Arc<dyn RandomSource>>,
}

impl HumanizerClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            api_key: None,
            base_url: None,
            model: None,
            request_timeout: None,
            poll: None,
            random: None,
        }
    }

    /// Start from a complete configuration. Individual setters still override it.
    pub fn config(mut self, config: HumanizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the service base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = Some(poll);
        self
    }

    /// Inject the random source used by the `default` fallback tone.
    pub fn random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HumanizerClient> {
        let mut config = match (self.config, self.api_key.clone()) {
            (Some(config), _) => config,
            (None, Some(key)) => HumanizerConfig::new(key),
            (None, None) => {
                return Err(Error::configuration_with_context(
                    "API key required (set api_key or HUMANIZER_API_KEY)",
                    ErrorContext::new()
                        .with_field_path("config.api_key")
                        .with_source("client_builder"),
                ))
            }
        };

        if let Some(key) = self.api_key {
            config.api_key = key;
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = timeout;
        }
        if let Some(poll) = self.poll {
            config.poll = poll;
        }
        config.validate()?;

        let transport = Arc::new(HttpTransport::new(&config)?);
        let fallback = match self.random {
            Some(random) => FallbackTransformer::new(random),
            None => FallbackTransformer::default(),
        };

        Ok(HumanizerClient {
            transport,
            model: config.model,
            poll: config.poll,
            fallback,
        })
    }
}

impl Default for HumanizerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
