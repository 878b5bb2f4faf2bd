//! Layer factories for middleware

use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Per-request tracing spans from tower-http
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// CORS middleware
pub fn cors(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // No CORS headers unless origins are configured
        return CorsLayer::new();
    }

    let header_values: Vec<_> = origins
        .iter()
        .filter_map(|origin| axum::http::HeaderValue::from_str(origin).ok())
        .collect();

    if header_values.is_empty() {
        tracing::warn!(?origins, "No valid CORS origins configured, CORS disabled");
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(header_values))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Compression middleware
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}

/// Answer with 408 once a request has run for `seconds`
pub fn timeout(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(seconds))
}
