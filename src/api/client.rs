//! HTTP fetch client for the inventory API.
//!
//! One operation: GET a URL and decode the JSON response into a resource
//! variant. The upstream service's test harness expects every GET to carry
//! a JSON body, so the client sends one by default; the body is
//! configurable rather than hard-wired.

use super::error::FetchError;
use super::model::Fetchable;
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// JSON body sent with every GET unless overridden in [`ClientConfig`].
pub const DEFAULT_CLIENT_MESSAGE: &str = r#"{"client_message": "hello, server!"}"#;

/// Settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Body attached to every GET request.
    pub request_body: String,
    /// Overall per-request deadline. `None` (the default) leaves reqwest's
    /// behavior untouched: no deadline is applied and a stalled server can
    /// block the caller indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_body: DEFAULT_CLIENT_MESSAGE.to_string(),
            request_timeout: None,
        }
    }
}

/// HTTP client wrapper for inventory API calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    request_body: String,
}

impl ApiClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with explicit settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent("topofetch/0.1.0");
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            request_body: config.request_body,
        })
    }

    /// Fetch `url` and decode the response into `R`.
    ///
    /// Status codes >= 400 are *not* errors: the status and body are logged
    /// and the variant's zero value comes back with the URL attached, so a
    /// caller cannot tell a rejection from an empty resource. That quirk is
    /// inherited from the upstream service contract and kept on purpose.
    pub async fn fetch<R: Fetchable>(&self, url: &str) -> Result<R, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .body(self.request_body.clone())
            .send()
            .await
            .map_err(|err| {
                tracing::error!("request error for {}: {}", url, err);
                FetchError::Transport(err)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::error!("failed to read response body from {}: {}", url, err);
            FetchError::Transport(err)
        })?;

        if status.as_u16() >= 400 {
            tracing::warn!("status code={}, body={}", status.as_u16(), body);
            let mut rejected = R::default();
            rejected.attach_source_url(url);
            return Ok(rejected);
        }

        match serde_json::from_str::<R>(&body) {
            Ok(mut decoded) => {
                decoded.attach_source_url(url);
                Ok(decoded)
            }
            Err(err) => {
                tracing::error!("failed to decode body from {}: {}: {}", url, err, body);
                Err(FetchError::Decode { source: err, body })
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}
