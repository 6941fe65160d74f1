//! Answering requests with JSON, for both values and errors

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::errors::{HttpError, ResponseError};

/// Build a JSON response from a handler result
///
/// `Ok` values are answered with 200 and encoded as they are. Errors are
/// answered with their own status code if they carry one, 500 otherwise,
/// and with their own JSON body if they provide one. Errors without a body
/// are wrapped in an [`HttpError`] at that code first.
///
/// The body is encoded before the status and headers are set, so an
/// encoding failure is returned without producing a half-built response.
pub fn respond_json<T, E>(reply: Result<T, E>) -> serde_json::Result<Response>
where
    T: Serialize,
    E: ResponseError,
{
    let (code, body) = match reply {
        Ok(value) => (StatusCode::OK.as_u16(), serde_json::to_vec(&value)?),
        Err(err) => {
            let code = err
                .as_status_coder()
                .map(|coder| coder.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.as_u16());
            let body = match err.to_json_body() {
                Some(body) => body?,
                None => HttpError::wrap(code, err).to_json()?,
            };
            (code, body)
        }
    };

    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    *response.status_mut() =
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(response)
}

/// Handler return type that answers through [`respond_json`]
pub struct JsonReply<T, E>(pub Result<T, E>);

impl<T, E> From<Result<T, E>> for JsonReply<T, E> {
    fn from(reply: Result<T, E>) -> Self {
        Self(reply)
    }
}

impl<T, E> IntoResponse for JsonReply<T, E>
where
    T: Serialize,
    E: ResponseError,
{
    fn into_response(self) -> Response {
        match respond_json(self.0) {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Failed to encode JSON response");
                HttpError::from_status(StatusCode::INTERNAL_SERVER_ERROR.as_u16()).into_response()
            }
        }
    }
}
