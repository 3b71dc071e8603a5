//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use wayfinder_config::{Config, CorsConfig, ServerConfig};

/// API key the mock backend accepts
pub const TEST_API_KEY: &str = "test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with no provider key and no CORS layer
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    cors: None,
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the provider at a mock backend with the accepted key
    pub fn with_provider(self, base_url: &str) -> Self {
        self.with_provider_key(base_url, TEST_API_KEY)
    }

    /// Point the provider at a mock backend with an arbitrary key
    pub fn with_provider_key(mut self, base_url: &str, api_key: &str) -> Self {
        self.config.provider.base_url = Some(base_url.to_owned());
        self.config.provider.api_key = Some(SecretString::from(api_key.to_owned()));
        self
    }

    /// Point the provider at a mock backend without any key
    pub fn without_api_key(mut self, base_url: &str) -> Self {
        self.config.provider.base_url = Some(base_url.to_owned());
        self.config.provider.api_key = None;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Override the configured speech voice
    pub fn with_voice(mut self, voice: &str) -> Self {
        self.config.tts.voice = voice.to_owned();
        self
    }

    /// Override the transcription language hint
    pub fn with_language(mut self, language: &str) -> Self {
        self.config.stt.language = Some(language.to_owned());
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
