//! Product API routes
//!
//! `search` and `suggestions` are registered as static segments, so they take
//! precedence over the `:id` capture.

use crate::api::handlers::products;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(products::search_products))
        .route("/suggestions", get(products::product_suggestions))
        .route("/:id", get(products::product_detail))
}
