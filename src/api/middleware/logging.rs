use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::codes;

/// Log each request and its outcome, keyed by a fresh request id
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    info!(%request_id, %method, %path, "Incoming request");

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    match outcome(status) {
        Some(outcome) => warn!(%request_id, %method, %path, status, %duration_ms, "Request failed ({})", outcome),
        None => info!(%request_id, %method, %path, status, %duration_ms, "Request completed"),
    }

    response
}

fn outcome(status: u16) -> Option<&'static str> {
    if codes::is_client_error(status) {
        Some("client error")
    } else if codes::is_server_error(status) {
        Some("server error")
    } else {
        None
    }
}
