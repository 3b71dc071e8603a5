use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use wayfinder_core::HttpError;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Missing or unusable client input
    #[error("{0}")]
    InvalidRequest(String),

    /// Provider is not usable with the current configuration
    #[error("{0}")]
    ConfigError(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider audio stream broke off
    #[error("Failed to read provider audio: {0}")]
    InternalError(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError(_)
            | Self::ConnectionError(_)
            | Self::ProviderApiError { .. }
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        wayfinder_core::error_response(self.status_code(), self.client_message())
    }
}
