use serde::{Deserialize, Serialize};

/// Sign photo sent by the client
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    /// Base64 image, optionally prefixed with a data-URL header
    #[serde(default)]
    pub image: Option<String>,
}

/// Text extraction request sent to a provider
#[derive(Debug)]
pub struct ExtractionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub image: crate::data_url::ImageData<'a>,
}

/// Extracted sign text returned to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct SignResponse {
    pub text: String,
}
