use wayfinder_config::{Config, VisionConfig};
use wayfinder_core::Credentials;

use crate::{
    data_url::split_data_url,
    error::VisionError,
    provider::{VisionProvider, openai_vision::OpenAiVisionProvider},
    types::{ExtractionRequest, SignResponse},
};

pub(crate) const NO_IMAGE_DATA: &str = "No image data provided";

/// Vision server holding the provider and the extraction settings
pub struct Server {
    provider: Box<dyn VisionProvider>,
    settings: VisionConfig,
}

impl Server {
    pub(crate) fn with_provider(provider: Box<dyn VisionProvider>, settings: VisionConfig) -> Self {
        Self { provider, settings }
    }

    /// Read the sign text from a base64 image, with or without a data-URL header
    pub(crate) async fn analyze(&self, image: Option<&str>) -> crate::error::Result<SignResponse> {
        let image = image
            .map(split_data_url)
            .filter(|image| !image.data.is_empty())
            .ok_or_else(|| VisionError::InvalidRequest(NO_IMAGE_DATA.to_owned()))?;

        let request = ExtractionRequest {
            model: &self.settings.model,
            prompt: &self.settings.prompt,
            max_tokens: self.settings.max_tokens,
            image,
        };

        tracing::info!(provider = self.provider.name(), "analyzing sign");

        let text = self.provider.extract_text(request).await?;

        tracing::info!(provider = self.provider.name(), "sign analysis: {text}");

        Ok(SignResponse { text })
    }
}

/// Builder for constructing the vision server from configuration
pub struct VisionServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> VisionServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let credentials = Credentials::from_config(&self.config.provider);

        tracing::debug!(model = %self.config.vision.model, "vision server initialized with openai provider");

        Server::with_provider(
            Box::new(OpenAiVisionProvider::new(credentials)),
            self.config.vision.clone(),
        )
    }
}
