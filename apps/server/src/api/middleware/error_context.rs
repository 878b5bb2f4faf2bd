//! Error body completion
//!
//! `IntoResponse` has no access to the request, so error bodies leave the
//! handlers without `path` and `method`. This middleware fills them in from
//! the [`RequestContext`]. Error responses produced by layers or by axum
//! itself (timeouts, unsupported methods) arrive with an empty body; they
//! get a full error body here too.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use storefront_models::{ErrorBody, ErrorCode};

use crate::error::error_body;
use crate::request_context::RequestContext;

pub async fn error_context_middleware(req: Request, next: Next) -> Response {
    let context = req
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_else(|| RequestContext::new(String::new(), req.method().clone(), req.uri()));

    let response = next.run(req).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let body = match response.extensions().get::<ErrorBody>() {
        Some(body) => body.clone(),
        None if response.headers().get(header::CONTENT_TYPE).is_none() => {
            error_body(status, default_message(status), default_code(status))
        }
        // Some other layer wrote its own body; leave it alone
        None => return response,
    };

    let body = ErrorBody {
        path: context.path,
        method: context.method.to_string(),
        ..body
    };

    let Ok(bytes) = serde_json::to_vec(&body) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.extensions.insert(body);

    Response::from_parts(parts, Body::from(bytes))
}

fn default_message(status: StatusCode) -> String {
    match status {
        StatusCode::REQUEST_TIMEOUT => "Request timed out".to_string(),
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed".to_string(),
        StatusCode::NOT_FOUND => "Not found".to_string(),
        s if s.is_server_error() => "Internal server error".to_string(),
        s => s.canonical_reason().unwrap_or("Error").to_string(),
    }
}

fn default_code(status: StatusCode) -> Option<ErrorCode> {
    match status {
        StatusCode::REQUEST_TIMEOUT => Some(ErrorCode::RequestTimeout),
        StatusCode::METHOD_NOT_ALLOWED => Some(ErrorCode::MethodNotAllowed),
        StatusCode::NOT_FOUND => Some(ErrorCode::NotFound),
        s if s.is_server_error() => Some(ErrorCode::InternalServerError),
        _ => None,
    }
}
