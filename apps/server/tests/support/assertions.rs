use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Assert an error envelope with the given status, code, method and path
pub fn assert_error_body(
    body: &Value,
    status: StatusCode,
    code: &str,
    method: &str,
    path: &str,
) -> anyhow::Result<()> {
    assert_eq!(
        body["statusCode"].as_u64(),
        Some(u64::from(status.as_u16())),
        "statusCode in {body}"
    );
    assert_eq!(body["code"].as_str(), Some(code), "code in {body}");
    assert_eq!(body["method"].as_str(), Some(method), "method in {body}");
    assert_eq!(body["path"].as_str(), Some(path), "path in {body}");
    assert_eq!(
        body["error"].as_str(),
        status.canonical_reason(),
        "error in {body}"
    );

    let timestamp = body["timestamp"].as_str().context("timestamp is string")?;
    chrono::DateTime::parse_from_rfc3339(timestamp).context("timestamp is RFC 3339")?;
    assert!(timestamp.ends_with('Z'), "timestamp is UTC: {timestamp}");

    let message = body["message"].as_str().context("message is string")?;
    assert!(!message.is_empty(), "message is not empty");
    Ok(())
}

/// Extract product IDs from a JSON array of products
pub fn product_ids(products: &Value) -> anyhow::Result<Vec<String>> {
    let products = products.as_array().context("products is array")?;
    Ok(products
        .iter()
        .filter_map(|p| p["id"].as_str().map(str::to_string))
        .collect())
}

/// Assert the `paging` object of a search response
pub fn assert_paging(response: &Value, total: u64, offset: u64, limit: u64) {
    let paging = &response["paging"];
    assert_eq!(paging["total"].as_u64(), Some(total), "paging.total in {paging}");
    assert_eq!(paging["offset"].as_u64(), Some(offset), "paging.offset in {paging}");
    assert_eq!(paging["limit"].as_u64(), Some(limit), "paging.limit in {paging}");
}
