use serde::{Deserialize, Serialize};

/// Audio file received from the client
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename; the provider sniffs the container from its extension
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
}

/// Transcription request sent to a provider
#[derive(Debug)]
pub struct TranscriptionRequest {
    pub upload: AudioUpload,
    /// Model identifier (e.g. "whisper-1")
    pub model: String,
    /// Optional language hint (ISO 639-1)
    pub language: Option<String>,
    /// Optional prompt to guide transcription
    pub prompt: Option<String>,
}

/// Transcription result returned to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}
