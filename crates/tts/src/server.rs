use wayfinder_config::{Config, TtsConfig};
use wayfinder_core::Credentials;

use crate::{
    error::TtsError,
    provider::{TtsProvider, openai_tts::OpenAiTtsProvider},
    types::{SpeakRequest, SpeechRequest, SpeechResponse},
};

pub(crate) const NO_TEXT: &str = "No text provided";

/// TTS server holding the provider and the voice settings
pub struct Server {
    provider: Box<dyn TtsProvider>,
    settings: TtsConfig,
}

impl Server {
    pub(crate) fn with_provider(provider: Box<dyn TtsProvider>, settings: TtsConfig) -> Self {
        Self { provider, settings }
    }

    /// Synthesize the requested text with the configured model and voice
    pub(crate) async fn speak(&self, request: SpeakRequest) -> crate::error::Result<SpeechResponse> {
        let input = request
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| TtsError::InvalidRequest(NO_TEXT.to_owned()))?;

        let voice = request
            .voice
            .filter(|voice| !voice.trim().is_empty())
            .unwrap_or_else(|| self.settings.voice.clone());

        let request = SpeechRequest {
            model: self.settings.model.clone(),
            input,
            voice,
            response_format: self.settings.response_format.clone(),
            speed: self.settings.speed,
        };

        tracing::info!(provider = self.provider.name(), voice = %request.voice, "synthesizing speech");

        self.provider.synthesize(request).await
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let credentials = Credentials::from_config(&self.config.provider);

        tracing::debug!(
            model = %self.config.tts.model,
            voice = %self.config.tts.voice,
            "TTS server initialized with openai provider"
        );

        Server::with_provider(Box::new(OpenAiTtsProvider::new(credentials)), self.config.tts.clone())
    }
}
