use async_trait::async_trait;
use reqwest::Client;
use wayfinder_core::{Credentials, MISSING_API_KEY, http_client, upstream_error_message};

use crate::{
    error::TtsError,
    types::{DEFAULT_AUDIO_CONTENT_TYPE, SpeechRequest, SpeechResponse},
};

use super::TtsProvider;

/// `OpenAI` TTS provider
pub(crate) struct OpenAiTtsProvider {
    client: Client,
    credentials: Credentials,
}

impl OpenAiTtsProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: http_client(),
            credentials,
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let authorization = self
            .credentials
            .bearer()
            .ok_or_else(|| TtsError::ConfigError(MISSING_API_KEY.to_owned()))?;

        let url = self.credentials.endpoint("audio/speech");

        tracing::debug!(
            "OpenAI TTS request: model={}, voice={}, input_len={}",
            request.model,
            request.voice,
            request.input.len(),
        );

        let body = OpenAiTtsRequest {
            model: &request.model,
            input: &request.input,
            voice: &request.voice,
            response_format: &request.response_format,
            speed: request.speed,
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| TtsError::ConnectionError(format!("Failed to send request to OpenAI TTS: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
                message: upstream_error_message(status, &body),
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::InternalError(e.to_string()))?;

        tracing::debug!("OpenAI TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
