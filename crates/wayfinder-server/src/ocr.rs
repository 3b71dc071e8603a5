use axum::response::Response;
use http::StatusCode;

/// Body returned by the disabled OCR endpoint
pub const OCR_UNSUPPORTED: &str = "Offline OCR (Tesseract) is not supported in this cloud deployment. \
     Please use the Sign Reader feature.";

/// Offline OCR is not available; clients are pointed at the sign reader
///
/// The request body is never read.
pub async fn ocr_handler() -> Response {
    wayfinder_core::error_response(StatusCode::NOT_IMPLEMENTED, OCR_UNSUPPORTED)
}
