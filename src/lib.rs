//! HTTP status codes for errors, and the JSON payload they travel as
//!
//! [`HttpError`] pairs an error with a status code. It serializes to
//! `{"message", "error", "statusCode"}`, [`respond_json`] answers axum requests
//! with it, and [`client::from_response`] turns such a body back into an error.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod respond;

pub use client::{from_reqwest, from_response, BodyError};
pub use errors::{BoxError, ErrorResponse, HttpError, Message, Opaque, ResponseError, StatusCoder};
pub use respond::{respond_json, JsonReply};
