use serde::Deserialize;

/// Speech synthesis settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Default voice, overridable per request
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    #[serde(default = "default_format")]
    pub response_format: String,
    /// Speech speed multiplier (0.25 to 4.0)
    #[serde(default)]
    pub speed: Option<f64>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            voice: default_voice(),
            response_format: default_format(),
            speed: None,
        }
    }
}

fn default_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

fn default_format() -> String {
    "mp3".to_string()
}
