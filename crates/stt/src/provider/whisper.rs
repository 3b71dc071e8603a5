use async_trait::async_trait;
use reqwest::Client;
use wayfinder_core::{Credentials, MISSING_API_KEY, http_client, upstream_error_message};

use crate::{
    error::SttError,
    types::{TranscriptionRequest, TranscriptionResponse},
};

use super::SttProvider;

/// `OpenAI` Whisper STT provider
pub(crate) struct WhisperProvider {
    client: Client,
    credentials: Credentials,
}

impl WhisperProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: http_client(),
            credentials,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl SttProvider for WhisperProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let authorization = self
            .credentials
            .bearer()
            .ok_or_else(|| SttError::ConfigError(MISSING_API_KEY.to_owned()))?;

        let url = self.credentials.endpoint("audio/transcriptions");
        let upload = request.upload;

        tracing::debug!(
            "Whisper transcription request: {} bytes, file={}, model={}",
            upload.audio.len(),
            upload.filename,
            request.model,
        );

        let part = reqwest::multipart::Part::bytes(upload.audio)
            .file_name(upload.filename)
            .mime_str(&upload.content_type)
            .map_err(|e| SttError::InvalidRequest(format!("Invalid audio content type: {e}")))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", request.model)
            .text("response_format", "json");

        if let Some(language) = request.language {
            form = form.text("language", language);
        }

        if let Some(prompt) = request.prompt {
            form = form.text("prompt", prompt);
        }

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SttError::ConnectionError(format!("Failed to send request to Whisper: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message: upstream_error_message(status, &body),
            });
        }

        let result: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SttError::InternalError(format!("failed to parse Whisper response: {e}")))?;

        Ok(TranscriptionResponse {
            text: result.text.trim().to_owned(),
        })
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
