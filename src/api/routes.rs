use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{echo_error, health, method_not_allowed, not_found, opaque_error, AppState};
use super::middleware::logging_middleware;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health).fallback(method_not_allowed))
        // Error endpoints
        .route("/errors/opaque", get(opaque_error).fallback(method_not_allowed))
        .route("/errors/:code", get(echo_error).fallback(method_not_allowed))
        .fallback(not_found)
        // Add middleware (order matters: logging -> trace)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
