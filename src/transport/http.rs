use crate::config::HumanizerConfig;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Header carrying the static credential.
pub const API_KEY_HEADER: &str = "apikey";

/// JSON-over-HTTP transport bound to one base URL and credential.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &HumanizerConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|e| {
            Error::configuration_with_context(
                format!("API key is not a valid header value: {}", e),
                ErrorContext::new()
                    .with_field_path("config.api_key")
                    .with_source("http_transport"),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(path, request).await
    }

    pub async fn get_json<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.client.get(self.url(path));
        self.execute(path, request).await
    }

    async fn execute<R>(&self, path: &str, request: reqwest::RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(path, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
