use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize, Serializer};

use super::HttpError;

/// Error payload exchanged over the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Standard reason phrase for the status code
    pub error: String,
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl From<&HttpError> for ErrorResponse {
    fn from(err: &HttpError) -> Self {
        Self {
            message: err.message(),
            error: err.status_text().to_string(),
            status_code: err.code(),
        }
    }
}

impl From<HttpError> for ErrorResponse {
    fn from(err: HttpError) -> Self {
        Self::from(&err)
    }
}

impl HttpError {
    /// Payload describing this error
    pub fn payload(&self) -> ErrorResponse {
        ErrorResponse::from(self)
    }

    /// Encode this error as a JSON payload
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.payload())
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}

fn status_or_internal(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (status_or_internal(self.status_code), Json(self)).into_response()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.payload().into_response()
    }
}
