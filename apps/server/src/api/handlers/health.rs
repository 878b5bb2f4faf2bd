//! Service endpoints outside the product API

use crate::Error;
use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use storefront_models::{HealthStatus, ServiceInfo};

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Storefront API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Returns 204 so browsers asking for an icon don't fill the logs with 404s
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub async fn not_found(method: Method, uri: Uri) -> Error {
    Error::NotFound(format!("Cannot {} {}", method, uri.path()))
}
