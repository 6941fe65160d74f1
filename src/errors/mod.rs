//! Errors that carry an HTTP status code

pub mod codes;
pub mod response;

pub use codes::{
    is_client_error, is_error, is_informational, is_redirect, is_server_error, is_success,
    status_text,
};
pub use response::ErrorResponse;

use axum::http::StatusCode;
use std::error::Error as StdError;
use std::fmt;

/// Type-erased error usable as a cause
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Returns an HTTP status code
pub trait StatusCoder {
    fn status_code(&self) -> u16;
}

/// Plain text cause, used for formatted messages and bodies read off the wire
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(pub String);

/// An error paired with the HTTP status code it should be answered with
#[derive(Debug)]
pub struct HttpError {
    code: u16,
    cause: Option<BoxError>,
}

impl HttpError {
    /// Create a new HTTP error. The code is stored as given, without validation.
    pub fn new(code: u16, cause: Option<BoxError>) -> Self {
        Self { code, cause }
    }

    /// Create an HTTP error with no cause
    pub fn from_status(code: u16) -> Self {
        Self::new(code, None)
    }

    /// Wrap an existing error at the given status code
    pub fn wrap(code: u16, cause: impl Into<BoxError>) -> Self {
        Self::new(code, Some(cause.into()))
    }

    /// Create an HTTP error whose cause is a message. See also [`http_error!`](crate::http_error).
    pub fn with_message(code: u16, message: impl Into<String>) -> Self {
        Self::wrap(code, Message(message.into()))
    }

    pub fn bad_request(cause: impl Into<BoxError>) -> Self {
        Self::wrap(StatusCode::BAD_REQUEST.as_u16(), cause)
    }

    pub fn internal_server_error(cause: impl Into<BoxError>) -> Self {
        Self::wrap(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), cause)
    }

    pub fn not_found(cause: impl Into<BoxError>) -> Self {
        Self::wrap(StatusCode::NOT_FOUND.as_u16(), cause)
    }

    pub fn method_not_allowed(cause: impl Into<BoxError>) -> Self {
        Self::wrap(StatusCode::METHOD_NOT_ALLOWED.as_u16(), cause)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Standard reason phrase for the stored code
    pub fn status_text(&self) -> &'static str {
        codes::status_text(self.code)
    }

    /// The wrapped error, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Message for the response body: the cause text, or the reason phrase without one
    pub fn message(&self) -> String {
        match &self.cause {
            Some(cause) => cause.to_string(),
            None => self.status_text().to_string(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unknown codes keep the separator and render as "<code> "
        write!(f, "{} {}", self.code, self.status_text())?;
        if let Some(cause) = &self.cause {
            write!(f, ": {:?}", cause.to_string())?;
        }
        Ok(())
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn StdError + 'static))
    }
}

impl StatusCoder for HttpError {
    fn status_code(&self) -> u16 {
        self.code
    }
}

/// What [`respond_json`](crate::respond::respond_json) may ask of an error
///
/// Both capabilities are optional. An error that provides neither is answered
/// with a 500 and the default payload shape.
pub trait ResponseError: Into<BoxError> {
    /// Status code capability, if the error carries one
    fn as_status_coder(&self) -> Option<&dyn StatusCoder> {
        None
    }

    /// Custom JSON body, if the error knows how to serialize itself
    fn to_json_body(&self) -> Option<serde_json::Result<Vec<u8>>> {
        None
    }
}

impl ResponseError for HttpError {
    fn as_status_coder(&self) -> Option<&dyn StatusCoder> {
        Some(self)
    }

    fn to_json_body(&self) -> Option<serde_json::Result<Vec<u8>>> {
        Some(self.to_json())
    }
}

impl ResponseError for BoxError {
    fn as_status_coder(&self) -> Option<&dyn StatusCoder> {
        self.downcast_ref::<HttpError>()
            .map(|err| err as &dyn StatusCoder)
    }

    fn to_json_body(&self) -> Option<serde_json::Result<Vec<u8>>> {
        self.downcast_ref::<HttpError>().map(HttpError::to_json)
    }
}

impl ResponseError for anyhow::Error {
    fn as_status_coder(&self) -> Option<&dyn StatusCoder> {
        self.downcast_ref::<HttpError>()
            .map(|err| err as &dyn StatusCoder)
    }

    fn to_json_body(&self) -> Option<serde_json::Result<Vec<u8>>> {
        self.downcast_ref::<HttpError>().map(HttpError::to_json)
    }
}

impl ResponseError for std::io::Error {}

impl ResponseError for serde_json::Error {}

/// Wrapper for third-party errors that have no status code of their own
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Opaque<E>(#[from] pub E);

impl<E> ResponseError for Opaque<E> where E: StdError + Send + Sync + 'static {}

/// Create an [`HttpError`] whose cause is a formatted message
///
/// ```
/// let err = httperr::http_error!(404, "no user named {:?}", "ada");
/// assert_eq!(err.to_string(), r#"404 Not Found: "no user named \"ada\"""#);
/// ```
#[macro_export]
macro_rules! http_error {
    ($code:expr, $($arg:tt)+) => {
        $crate::errors::HttpError::with_message($code, format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_cause() {
        assert_eq!(HttpError::from_status(404).to_string(), "404 Not Found");
        assert_eq!(HttpError::new(500, None).to_string(), "500 Internal Server Error");
    }

    #[test]
    fn test_display_quotes_cause() {
        let err = HttpError::with_message(404, "missing");
        assert_eq!(err.to_string(), "404 Not Found: \"missing\"");

        let err = HttpError::with_message(400, "say \"hi\"\n");
        assert_eq!(err.to_string(), r#"400 Bad Request: "say \"hi\"\n""#);
    }

    #[test]
    fn test_display_unknown_code() {
        assert_eq!(HttpError::from_status(299).to_string(), "299 ");
        assert_eq!(
            HttpError::with_message(999, "odd").to_string(),
            "999 : \"odd\""
        );
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(HttpError::bad_request("x").code(), 400);
        assert_eq!(HttpError::internal_server_error("x").code(), 500);
        assert_eq!(HttpError::not_found("x").code(), 404);
        assert_eq!(HttpError::method_not_allowed("x").code(), 405);
    }

    #[test]
    fn test_new_accepts_any_code() {
        let err = HttpError::from_status(42);
        assert_eq!(err.code(), 42);
        assert_eq!(err.status_code(), 42);
        assert_eq!(err.status_text(), "");
    }

    #[test]
    fn test_http_error_macro() {
        let err = crate::http_error!(400, "bad field {} at {}", "name", 3);
        assert_eq!(err.code(), 400);
        assert_eq!(err.message(), "bad field name at 3");
        assert_eq!(
            err.cause().and_then(|c| c.downcast_ref::<Message>()),
            Some(&Message("bad field name at 3".to_string()))
        );
    }

    #[test]
    fn test_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = HttpError::not_found(io);

        let source = err.source().expect("cause should be exposed as source");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("cause should keep its concrete type");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);

        assert!(HttpError::from_status(404).source().is_none());
    }

    #[test]
    fn test_message_defaults_to_status_text() {
        assert_eq!(HttpError::from_status(405).message(), "Method Not Allowed");
        assert_eq!(HttpError::with_message(405, "use POST").message(), "use POST");
    }

    #[test]
    fn test_capabilities() {
        let err = HttpError::from_status(418);
        assert_eq!(err.as_status_coder().map(|c| c.status_code()), Some(418));
        assert!(err.to_json_body().is_some());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(io.as_status_coder().is_none());
        assert!(io.to_json_body().is_none());

        let boxed: BoxError = Box::new(HttpError::from_status(409));
        assert_eq!(boxed.as_status_coder().map(|c| c.status_code()), Some(409));

        let boxed: BoxError = "plain".into();
        assert!(boxed.as_status_coder().is_none());

        let any = anyhow::Error::new(HttpError::from_status(503));
        assert_eq!(any.as_status_coder().map(|c| c.status_code()), Some(503));

        let opaque = Opaque(std::fmt::Error);
        assert!(opaque.as_status_coder().is_none());
        assert!(opaque.to_json_body().is_none());
    }
}
