use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Default upstream API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Upstream provider credentials shared by every endpoint
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key; falls back to the `OPENAI_API_KEY` environment variable
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (e.g. a proxy or a local mock)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Configured base URL without a trailing slash
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_owned()
    }

    /// Whether a non-empty API key is available
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}
