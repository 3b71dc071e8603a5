#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod tts;
pub mod vision;

use serde::Deserialize;

pub use cors::*;
pub use env::ExpandError;
pub use health::*;
pub use loader::{API_KEY_ENV, load_dotenv};
pub use provider::*;
pub use server::*;
pub use stt::*;
pub use telemetry::*;
pub use tts::*;
pub use vision::*;

/// Top-level Wayfinder configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream provider credentials
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Transcription settings
    #[serde(default)]
    pub stt: SttConfig,
    /// Sign reading settings
    #[serde(default)]
    pub vision: VisionConfig,
    /// Speech synthesis settings
    #[serde(default)]
    pub tts: TtsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
