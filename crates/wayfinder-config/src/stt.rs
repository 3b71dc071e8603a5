use serde::Deserialize;

/// Transcription settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional language hint (ISO 639-1)
    #[serde(default)]
    pub language: Option<String>,
    /// Optional prompt to bias the transcription
    #[serde(default)]
    pub prompt: Option<String>,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            language: None,
            prompt: None,
        }
    }
}

fn default_model() -> String {
    "whisper-1".to_string()
}
