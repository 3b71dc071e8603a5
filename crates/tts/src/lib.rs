#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};
use wayfinder_core::ExtractPayload;

pub use error::{Result, TtsError};
pub use server::{Server, TtsServerBuilder};
pub use types::{SpeakRequest, SpeechResponse};

/// Build the TTS server from configuration
pub fn build_server(config: &wayfinder_config::Config) -> Arc<Server> {
    Arc::new(TtsServerBuilder::new(config).build())
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/speak", post(speak))
}

/// Handle speech synthesis requests
async fn speak(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload<SpeakRequest>,
) -> Result<SpeechResponse> {
    tracing::debug!(
        "TTS speech handler called, text_len={}",
        request.text.as_deref().map_or(0, str::len)
    );

    let response = server.speak(request).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response)
}
