use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use wayfinder_core::HttpError;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription errors
#[derive(Debug, Error)]
pub enum SttError {
    /// Missing or unusable client input
    #[error("{0}")]
    InvalidRequest(String),

    /// Multipart body could not be decoded
    #[error("{message}")]
    Multipart { status: StatusCode, message: String },

    /// Provider is not usable with the current configuration
    #[error("{0}")]
    ConfigError(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered with a body we could not understand
    #[error("Invalid provider response: {0}")]
    InternalError(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Multipart { status, .. } => *status,
            Self::ConfigError(_)
            | Self::ConnectionError(_)
            | Self::ProviderApiError { .. }
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        wayfinder_core::error_response(self.status_code(), self.client_message())
    }
}
