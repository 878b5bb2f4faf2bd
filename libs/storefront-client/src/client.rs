//! Storefront API client

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use storefront_models::{HealthStatus, ProductDetail, ProductSummary, SearchResponse};

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the storefront catalog API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    retry: RetryPolicy,
}

impl StorefrontClient {
    /// Create a client with the default timeout and retry policy.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, RetryPolicy::default())
    }

    pub fn with_options(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
            retry,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/v1/products/search`
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<SearchResponse> {
        let mut params = vec![("q", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }

        let url = self.endpoint(&["api", "v1", "products", "search"])?;
        self.get_json(url, &params).await
    }

    /// `GET /api/v1/products/suggestions`
    pub async fn suggestions(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ProductSummary>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        let url = self.endpoint(&["api", "v1", "products", "suggestions"])?;
        self.get_json(url, &params).await
    }

    /// `GET /api/v1/products/{id}`
    pub async fn product(&self, id: &str) -> Result<ProductDetail> {
        let url = self.endpoint(&["api", "v1", "products", id])?;
        self.get_json(url, &[]).await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        self.get_json(url, &[]).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.with_retry(|| self.get_once(url.clone(), params)).await
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "GET");

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &bytes),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.to_string()))
    }

    async fn with_retry<T, F, Fut>(&self, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retry = 0;
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && retry < self.retry.max_retries => {
                    let delay = self.retry.delay_for(retry);
                    tracing::warn!(
                        error = %err,
                        retry = retry + 1,
                        delay_ms = delay.as_millis(),
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout.as_millis())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

/// Server-provided `message` of an error body, or a generic text.
fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP Error {status}"))
}
