//! Turning error responses received from a server back into [`HttpError`]s

use axum::http::{header, HeaderMap};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

use crate::errors::{BoxError, HttpError, Message};

/// Why a response body could not be turned into a message
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body stream failed while being drained
    #[error("Failed to read response body: {:?}", .0.to_string())]
    Read(#[source] std::io::Error),

    /// The HTTP client failed while streaming the body
    #[error("Failed to read response body: {:?}", .0.to_string())]
    Transport(#[source] reqwest::Error),

    /// The body was expected to hold an error payload but did not decode
    #[error("Error parsing response: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Error payload as received from a peer
///
/// Wider than [`ErrorResponse`](crate::errors::ErrorResponse) so that any integer
/// `statusCode` and `null` fields still decode. Only `message` is kept.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
struct Incoming {
    message: Option<String>,
    error: Option<String>,
    #[serde(rename = "statusCode")]
    status_code: Option<i64>,
}

/// Create an HTTP error from a received response
///
/// The body is read to the end and dropped before returning, on every path.
pub fn from_response<R: Read>(status: u16, headers: &HeaderMap, mut body: R) -> HttpError {
    let mut data = Vec::new();
    let read = body.read_to_end(&mut data);
    drop(body);

    match read {
        Ok(_) => HttpError::new(status, Some(cause_from_body(headers, &data))),
        Err(e) => {
            debug!(status, error = %e, "Failed to read error response body");
            HttpError::wrap(status, BodyError::Read(e))
        }
    }
}

/// Create an HTTP error from a `reqwest` response, consuming its body
pub async fn from_reqwest(response: reqwest::Response) -> HttpError {
    let status = response.status().as_u16();
    let headers = response.headers().clone();

    match response.bytes().await {
        Ok(data) => HttpError::new(status, Some(cause_from_body(&headers, &data))),
        Err(e) => {
            debug!(status, error = %e, "Failed to read error response body");
            HttpError::wrap(status, BodyError::Transport(e))
        }
    }
}

fn cause_from_body(headers: &HeaderMap, data: &[u8]) -> BoxError {
    let media_type = media_type(headers);

    match media_type.as_str() {
        "text/plain" | "text/html" | "text/xml" => {
            debug!(media_type = %media_type, len = data.len(), "Using raw body as error message");
            Box::new(Message(String::from_utf8_lossy(data).into_owned()))
        }
        // Anything else, known or not, is expected to carry an error payload
        _ => match serde_json::from_slice::<Option<Incoming>>(data) {
            Ok(payload) => {
                let message = payload.and_then(|p| p.message).unwrap_or_default();
                Box::new(Message(message))
            }
            Err(e) => {
                debug!(media_type = %media_type, error = %e, "Failed to decode error payload");
                Box::new(BodyError::Parse(e))
            }
        },
    }
}

/// Media type of the `Content-Type` header, lowercased and without parameters
///
/// Returns an empty string when the header is missing or malformed.
pub fn media_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_media_type)
        .unwrap_or_default()
}

fn parse_media_type(value: &str) -> Option<String> {
    let essence = value.split(';').next()?.trim();
    let (kind, subtype) = essence.split_once('/')?;
    if !is_token(kind) || !is_token(subtype) {
        return None;
    }
    Some(essence.to_ascii_lowercase())
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c))
}
