mod support;

use axum::http::{Method, StatusCode};
use serde_json::Value;
use support::{assert_status, TestApp};

#[tokio::test]
async fn health_endpoints_report_ok() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    for path in ["/health", "/api/v1/health"] {
        let (status, body) = app.get_json::<Value>(path).await?;
        assert_status(status, StatusCode::OK, path);
        assert_eq!(body["status"], "ok");
        let timestamp = body["timestamp"].as_str().unwrap_or_default();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (status, body) = app.get_json::<Value>("/").await?;
    assert_status(status, StatusCode::OK, "root");
    assert_eq!(body["name"], "Storefront API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn favicon_is_no_content() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (status, _headers, body) = app.get("/favicon.ico").await?;
    assert_status(status, StatusCode::NO_CONTENT, "favicon");
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn responses_carry_request_id() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (_, headers, _) = app.get("/health").await?;
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(uuid::Uuid::parse_str(request_id).is_ok(), "x-request-id is a UUID");
    assert!(headers.get("x-correlation-id").is_none());

    let (_, other_headers, _) = app.get("/health").await?;
    assert_ne!(other_headers.get("x-request-id"), headers.get("x-request-id"));
    Ok(())
}

#[tokio::test]
async fn client_request_id_is_echoed_as_correlation_id() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (_, headers, _) = app
        .request_with_extra_headers(
            Method::GET,
            "/api/v1/products/search?q=iphone",
            &[("x-request-id", "client-abc-123")],
        )
        .await?;
    assert_eq!(
        headers.get("x-correlation-id").and_then(|v| v.to_str().ok()),
        Some("client-abc-123")
    );
    assert_ne!(
        headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("client-abc-123")
    );
    Ok(())
}

#[tokio::test]
async fn cors_preflight_is_answered_for_configured_origin() -> anyhow::Result<()> {
    let app = TestApp::new_with_config(|config| {
        config.server.cors_origins = vec!["http://localhost:5173".to_string()];
    })?;

    let (status, headers, _) = app
        .request_with_extra_headers(
            Method::OPTIONS,
            "/api/v1/products/search",
            &[
                ("origin", "http://localhost:5173"),
                ("access-control-request-method", "GET"),
            ],
        )
        .await?;
    assert!(status.is_success(), "preflight status {status}");
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    Ok(())
}
