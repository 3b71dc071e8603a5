#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod data_url;
mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use wayfinder_core::ExtractPayload;

pub use error::{Result, VisionError};
pub use server::{Server, VisionServerBuilder};
pub use types::{SignRequest, SignResponse};

/// Build the vision server from configuration
pub fn build_server(config: &wayfinder_config::Config) -> Arc<Server> {
    Arc::new(VisionServerBuilder::new(config).build())
}

/// Create the endpoint router for sign reading
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/analyze_sign", post(analyze_sign))
}

/// Handle sign reading requests
async fn analyze_sign(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload<SignRequest>,
) -> Result<Json<SignResponse>> {
    tracing::debug!(
        "sign handler called, image_len={}",
        request.image.as_deref().map_or(0, str::len)
    );

    let response = server.analyze(request.image.as_deref()).await?;

    Ok(Json(response))
}
