use secrecy::{ExposeSecret, SecretString};
use wayfinder_config::ProviderConfig;

/// Message returned when a key-requiring endpoint runs without an API key
pub const MISSING_API_KEY: &str = "OPENAI_API_KEY not found in environment variables";

/// Resolved upstream credentials held by each provider
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: Option<SecretString>,
    base_url: String,
}

impl Credentials {
    pub fn new(api_key: Option<SecretString>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.expose_secret().trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url())
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Absolute URL for an upstream path such as `audio/speech`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, or `None` when no key is configured
    pub fn bearer(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| format!("Bearer {}", key.expose_secret()))
    }
}
