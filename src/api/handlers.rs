use axum::{
    extract::{Path, Query, State},
    http::{Method, Uri},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::errors::{codes, HttpError, Opaque};
use crate::respond::JsonReply;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub instance_id: String,
    pub started_at: Instant,
}

impl AppStateInner {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            started_at: Instant::now(),
        }
    }
}

/// Query parameters for the error echo endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorParams {
    /// Message to use as the error cause
    pub message: Option<String>,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> JsonReply<Value, HttpError> {
    JsonReply(Ok(json!({
        "status": "healthy",
        "service": "httperr",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    })))
}

/// Answer with an error at the requested status code
pub async fn echo_error(
    Path(code): Path<String>,
    Query(params): Query<ErrorParams>,
) -> JsonReply<Value, HttpError> {
    let code = match code.parse::<u16>() {
        Ok(code) if codes::is_error(code) => code,
        _ => {
            return JsonReply(Err(crate::http_error!(
                400,
                "status code must be between 400 and 599, got {:?}",
                code
            )))
        }
    };

    info!(code, message = ?params.message, "Echoing error");

    JsonReply(Err(match params.message {
        Some(message) => HttpError::with_message(code, message),
        None => HttpError::from_status(code),
    }))
}

/// Answer with an error that carries no status code of its own
pub async fn opaque_error() -> JsonReply<Value, Opaque<std::io::Error>> {
    JsonReply(Err(Opaque(std::io::Error::new(
        std::io::ErrorKind::Other,
        "storage backend unavailable",
    ))))
}

pub async fn not_found(uri: Uri) -> HttpError {
    crate::http_error!(404, "no route for {}", uri.path())
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> HttpError {
    HttpError::method_not_allowed(format!("{} is not supported on {}", method, uri.path()))
}
