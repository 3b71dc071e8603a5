#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};

pub use error::{Result, SttError};
pub use request::ExtractAudio;
pub use server::{Server, SttServerBuilder};
pub use types::{AudioUpload, TranscriptionResponse};

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Build the STT server from configuration
pub fn build_server(config: &wayfinder_config::Config) -> Arc<Server> {
    Arc::new(SttServerBuilder::new(config).build())
}

/// Create the endpoint router for STT
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route(
        "/api/transcribe",
        post(transcribe).layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
    )
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractAudio(upload): ExtractAudio,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!(
        "STT transcription handler called: {} ({} bytes, {})",
        upload.filename,
        upload.audio.len(),
        upload.content_type,
    );

    let response = server.transcribe(upload).await?;

    Ok(Json(response))
}
