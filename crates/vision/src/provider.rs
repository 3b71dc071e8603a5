pub(crate) mod openai_vision;

use async_trait::async_trait;

use crate::types::ExtractionRequest;

/// Trait for vision provider implementations
#[async_trait]
pub(crate) trait VisionProvider: Send + Sync {
    /// Read the text visible in an image
    async fn extract_text(&self, request: ExtractionRequest<'_>) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
