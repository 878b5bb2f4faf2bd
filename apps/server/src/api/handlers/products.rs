//! Product handlers
//!
//! - `GET /api/v1/products/search?q=&limit=&offset=`
//! - `GET /api/v1/products/suggestions?q=&limit=`
//! - `GET /api/v1/products/:id`

use crate::{api::extractors::ValidatedQuery, state::AppState, Result};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use storefront_models::{ProductDetail, ProductSummary, SearchResponse};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    /// Missing `q` is treated as an empty query
    #[serde(default)]
    pub q: String,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
}

pub async fn search_products(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let result = state
        .search_service
        .search_products(&params.q, params.limit, params.offset)
        .await?;
    Ok(Json(SearchResponse::from(result)))
}

pub async fn product_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SuggestionParams>,
) -> Result<Json<Vec<ProductSummary>>> {
    let products = state
        .suggestion_service
        .suggestions(&params.q, params.limit)
        .await?;
    Ok(Json(products.iter().map(ProductSummary::from).collect()))
}

pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let product = state.product_service.product_detail(&id).await?;
    Ok(Json(ProductDetail::from(&product)))
}
