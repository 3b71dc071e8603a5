use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use wayfinder_core::{Credentials, MISSING_API_KEY, http_client, upstream_error_message};

use crate::{error::VisionError, types::ExtractionRequest};

use super::VisionProvider;

/// `OpenAI` chat completions provider used with a vision-capable model
pub(crate) struct OpenAiVisionProvider {
    client: Client,
    credentials: Credentials,
}

impl OpenAiVisionProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: http_client(),
            credentials,
        }
    }
}

// -- Wire types --

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: [ContentPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl VisionProvider for OpenAiVisionProvider {
    async fn extract_text(&self, request: ExtractionRequest<'_>) -> crate::error::Result<String> {
        let authorization = self
            .credentials
            .bearer()
            .ok_or_else(|| VisionError::ConfigError(MISSING_API_KEY.to_owned()))?;

        let url = self.credentials.endpoint("chat/completions");

        tracing::debug!(
            "OpenAI vision request: model={}, mime={}, image_len={}",
            request.model,
            request.image.mime_type,
            request.image.data.len(),
        );

        let body = ChatRequest {
            model: request.model,
            messages: [ChatMessage {
                role: "user",
                content: [
                    ContentPart::Text { text: request.prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: request.image.to_data_url(),
                        },
                    },
                ],
            }],
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionError::ConnectionError(format!("Failed to send request to OpenAI vision: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(VisionError::ProviderApiError {
                status: status.as_u16(),
                message: upstream_error_message(status, &body),
            });
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InternalError(format!("failed to parse chat completion: {e}")))?;

        let text = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(text.trim().to_owned())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
