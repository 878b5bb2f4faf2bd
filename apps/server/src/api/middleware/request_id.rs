//! Request ID and request logging middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Span;
use uuid::Uuid;

use crate::request_context::RequestContext;

/// Creates the root span for each HTTP request and:
/// - Generates a server request ID and records it on the span
/// - Makes a [`RequestContext`] available to inner middleware and handlers
/// - Logs request completion with status and duration
///
/// The server ID is returned in `X-Request-Id`. A client-supplied
/// `X-Request-Id` that differs from it is echoed in `X-Correlation-Id`.
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        http.response.status_code = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let current_span = Span::current();
    let start = Instant::now();

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let server_id = Uuid::new_v4().to_string();
    current_span.record("request_id", &server_id);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let context = RequestContext::new(server_id.clone(), method.clone(), req.uri());
    let mut req = req;
    req.extensions_mut().insert(context);

    tracing::debug!(
        method = %method,
        path = %path,
        request_id = %server_id,
        "Incoming request"
    );

    let mut response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();
    current_span.record("http.response.status_code", status.as_u16());

    tracing::info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = duration.as_millis(),
        request_id = %server_id,
        "Request completed"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&server_id) {
        headers.insert("x-request-id", value);
    }

    if let Some(client_id) = client_id {
        if client_id != server_id {
            if let Ok(value) = HeaderValue::from_str(&client_id) {
                headers.insert("x-correlation-id", value);
            }
        }
    }

    response
}
