use wayfinder_config::{Config, SttConfig};
use wayfinder_core::Credentials;

use crate::{
    provider::{SttProvider, whisper::WhisperProvider},
    types::{AudioUpload, TranscriptionRequest, TranscriptionResponse},
};

/// STT server holding the provider and the transcription settings
pub struct Server {
    provider: Box<dyn SttProvider>,
    settings: SttConfig,
}

impl Server {
    pub(crate) fn with_provider(provider: Box<dyn SttProvider>, settings: SttConfig) -> Self {
        Self { provider, settings }
    }

    /// Transcribe an uploaded audio file using the configured model
    pub(crate) async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse> {
        let request = TranscriptionRequest {
            upload,
            model: self.settings.model.clone(),
            language: self.settings.language.clone(),
            prompt: self.settings.prompt.clone(),
        };

        tracing::info!(provider = self.provider.name(), "transcribing audio");

        let response = self.provider.transcribe(request).await?;

        tracing::info!(provider = self.provider.name(), "transcription: {}", response.text);

        Ok(response)
    }
}

/// Builder for constructing the STT server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> SttServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let credentials = Credentials::from_config(&self.config.provider);

        tracing::debug!(model = %self.config.stt.model, "STT server initialized with whisper provider");

        Server::with_provider(Box::new(WhisperProvider::new(credentials)), self.config.stt.clone())
    }
}
