//! API layer - routes, handlers, and middleware

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.server.cors_origins.clone();
    let request_timeout = state.config.server.request_timeout_seconds;

    let api_v1 = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/products", routes::products::product_routes());

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Root endpoint
        .route("/", get(handlers::root))
        .route("/favicon.ico", get(handlers::favicon))
        .nest("/api/v1", api_v1)
        .fallback(handlers::not_found)
        .with_state(state)
        // Add middleware (applied in reverse order)
        .layer(middleware::timeout(request_timeout))
        .layer(axum::middleware::from_fn(
            middleware::error_context_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
}
