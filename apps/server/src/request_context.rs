//! Per-request context injected by middleware.

use axum::http::{Method, Uri};

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: Method,
    /// Path plus query string, as reported in error bodies
    pub path: String,
}

impl RequestContext {
    pub fn new(request_id: String, method: Method, uri: &Uri) -> Self {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        Self {
            request_id,
            method,
            path,
        }
    }
}
