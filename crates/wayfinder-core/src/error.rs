use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type so all endpoints share one
/// status mapping and one error body.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// JSON body returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build an `{ "error": message }` response and log it
///
/// Server-side failures log at `error`, client mistakes at `warn`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), "{message}");
    } else {
        tracing::warn!(status = status.as_u16(), "{message}");
    }

    (status, Json(ErrorBody { error: message })).into_response()
}

#[derive(Deserialize)]
struct UpstreamErrorEnvelope {
    error: UpstreamErrorDetail,
}

#[derive(Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

/// Human-readable message for a failed upstream call
///
/// Prefers the `error.message` field of a JSON error envelope, then the raw
/// body, then the status reason phrase.
pub fn upstream_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<UpstreamErrorEnvelope>(body)
        && !envelope.error.message.is_empty()
    {
        return envelope.error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_owned()
    } else {
        body.to_owned()
    }
}
