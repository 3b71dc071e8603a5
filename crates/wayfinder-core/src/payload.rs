use axum::{body::Body, response::Response};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::error_response;

/// Extractor for JSON request bodies
///
/// Rejections use the shared `{ "error": message }` body so clients see one
/// error shape regardless of where a request fails.
pub struct ExtractPayload<T>(pub T);

/// Body limit for JSON requests (16 MiB, enough for a base64 phone photo)
const BODY_LIMIT_BYTES: usize = 16 << 20;

fn is_json(value: &http::HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !parts.headers.get(http::header::CONTENT_TYPE).is_some_and(is_json) {
            return Err(error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected: 'Content-Type: application/json'",
            ));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                error_response(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    format!("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
                )
            } else {
                error_response(StatusCode::BAD_REQUEST, format!("Failed to read request body: {err}"))
            }
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, format!("Failed to parse request body: {e}")))
    }
}
