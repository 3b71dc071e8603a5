use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Content type used when the provider does not label its audio
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Speech request sent by the client
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// Text to speak
    #[serde(default)]
    pub text: Option<String>,
    /// Voice override; the configured voice is used when absent
    #[serde(default)]
    pub voice: Option<String>,
}

/// Speech synthesis request following `OpenAI` TTS API format
#[derive(Debug)]
pub struct SpeechRequest {
    /// Model identifier (e.g. "tts-1")
    pub model: String,
    /// Text to synthesize into speech
    pub input: String,
    /// Voice identifier (e.g. "alloy")
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    pub response_format: String,
    /// Speech speed multiplier (0.25 to 4.0)
    pub speed: Option<f64>,
}

/// Raw audio response from a TTS provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl IntoResponse for SpeechResponse {
    fn into_response(self) -> Response {
        ([(http::header::CONTENT_TYPE, self.content_type)], self.audio).into_response()
    }
}
