#![allow(dead_code)]

pub mod assertions;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use storefront::{api::create_router, AppState, Config};
use tower::ServiceExt as _;

pub use assertions::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> anyhow::Result<Self> {
        Self::new_with_config(|_| {})
    }

    /// Build an app over the embedded catalog with mock latency disabled.
    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.mock.delay_min_ms = 0;
        config.mock.delay_max_ms = 0;
        config.mock.error_simulation_enabled = false;
        configure(&mut config);

        let state = AppState::new(config).context("initialize AppState")?;
        let router = create_router(state.clone());

        Ok(Self { router, state })
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request(Method::GET, path_and_query).await
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, T)> {
        let (status, _headers, body) = self.get(path_and_query).await?;
        let value = serde_json::from_slice(&body)
            .with_context(|| format!("decode JSON body of {path_and_query}"))?;
        Ok((status, value))
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, path_and_query, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path_and_query: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "localhost")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }
}
