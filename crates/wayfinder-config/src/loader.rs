use std::path::{Path, PathBuf};

use secrecy::SecretString;

use crate::Config;

/// Environment variable consulted when the config file sets no API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Load a `.env` file from the working directory or one of its parents
///
/// Variables already present in the process environment are left alone.
/// Returns the path that was loaded, or `None` if no file was found.
///
/// # Errors
///
/// Returns an error if a `.env` file exists but cannot be parsed
pub fn load_dotenv() -> anyhow::Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow::anyhow!("failed to load .env file: {e}")),
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the default configuration. After parsing, the
    /// API key falls back to [`API_KEY_ENV`] when the file does not set one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, environment
    /// variable expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
            Self::from_toml(&raw)?
        } else {
            Self::default()
        };

        config.resolve_api_key();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration text, expanding `{{ env.VAR }}` placeholders first
    ///
    /// # Errors
    ///
    /// Returns an error if expansion or TOML parsing fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Fill in the API key from the environment if the file left it empty
    ///
    /// An empty key is treated the same as a missing one. A missing key is not
    /// an error: endpoints report it when called.
    pub fn resolve_api_key(&mut self) {
        if self.provider.has_api_key() {
            return;
        }

        self.provider.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a model name is empty or a numeric setting is out
    /// of range
    pub fn validate(&self) -> anyhow::Result<()> {
        for (section, model) in [
            ("stt", &self.stt.model),
            ("vision", &self.vision.model),
            ("tts", &self.tts.model),
        ] {
            if model.trim().is_empty() {
                anyhow::bail!("{section}.model must not be empty");
            }
        }

        if self.tts.voice.trim().is_empty() {
            anyhow::bail!("tts.voice must not be empty");
        }

        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", self.server.health.path);
        }

        if self.vision.max_tokens == 0 {
            anyhow::bail!("vision.max_tokens must be greater than 0");
        }

        if let Some(speed) = self.tts.speed
            && !(0.25..=4.0).contains(&speed)
        {
            anyhow::bail!("tts.speed must be between 0.25 and 4.0, got {speed}");
        }

        if let Some(base_url) = &self.provider.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            anyhow::bail!("provider.base_url must be an http(s) URL, got '{base_url}'");
        }

        if let Some(cors) = &self.server.cors
            && cors.credentials
            && (cors.origins.is_any() || cors.headers.is_any() || cors.methods.is_any())
        {
            anyhow::bail!("server.cors.credentials requires explicit origins, methods and headers");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;

    use super::*;
    use crate::{AnyOrArray, LogFormat};

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        temp_env::with_var_unset(API_KEY_ENV, || {
            let config = Config::load(Path::new("/nonexistent/wayfinder.toml")).unwrap();

            assert!(config.provider.api_key.is_none());
            assert_eq!(config.provider.base_url(), "https://api.openai.com/v1");
            assert_eq!(config.server.listen_address_or_default().port(), 5000);
            assert!(config.server.health.enabled);
            assert!(config.server.cors.as_ref().is_some_and(|c| c.origins == AnyOrArray::Any));
            assert_eq!(config.stt.model, "whisper-1");
            assert_eq!(config.vision.model, "gpt-4o");
            assert_eq!(config.tts.voice, "alloy");
            assert_eq!(config.telemetry.format, LogFormat::Text);
        });
    }

    #[test]
    fn api_key_falls_back_to_environment() {
        temp_env::with_var(API_KEY_ENV, Some("sk-from-env"), || {
            let config = Config::load(Path::new("/nonexistent/wayfinder.toml")).unwrap();
            let key = config.provider.api_key.unwrap();
            assert_eq!(key.expose_secret(), "sk-from-env");
        });
    }

    #[test]
    fn blank_environment_key_counts_as_missing() {
        temp_env::with_var(API_KEY_ENV, Some("   "), || {
            let config = Config::load(Path::new("/nonexistent/wayfinder.toml")).unwrap();
            assert!(config.provider.api_key.is_none());
        });
    }

    #[test]
    fn file_key_wins_over_environment() {
        let file = write_config("[provider]\napi_key = \"sk-from-file\"\n");

        temp_env::with_var(API_KEY_ENV, Some("sk-from-env"), || {
            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.provider.api_key.unwrap().expose_secret(), "sk-from-file");
        });
    }

    #[test]
    fn empty_file_key_uses_environment() {
        let file = write_config("[provider]\napi_key = \"\"\n");

        temp_env::with_var(API_KEY_ENV, Some("sk-from-env"), || {
            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.provider.api_key.unwrap().expose_secret(), "sk-from-env");
        });
    }

    #[test]
    fn placeholders_are_expanded_before_parsing() {
        let file = write_config(
            "[provider]\nbase_url = \"{{ env.WF_MOCK_URL }}\"\n\n[tts]\nvoice = \"{{ env.WF_MOCK_VOICE | default(\"echo\") }}\"\n",
        );

        temp_env::with_vars([("WF_MOCK_URL", Some("http://127.0.0.1:9999/v1/")), ("WF_MOCK_VOICE", None)], || {
            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.provider.base_url(), "http://127.0.0.1:9999/v1");
            assert_eq!(config.tts.voice, "echo");
        });
    }

    #[test]
    fn full_config_parses() {
        let raw = r#"
            [server]
            listen_address = "127.0.0.1:8080"

            [server.health]
            path = "/healthz"

            [server.cors]
            origins = ["http://localhost:5173"]
            methods = ["POST"]
            headers = ["content-type"]
            credentials = true
            max_age = 60

            [stt]
            model = "whisper-1"
            language = "en"

            [vision]
            model = "gpt-4o-mini"
            prompt = "Read the sign."
            max_tokens = 64

            [tts]
            model = "tts-1-hd"
            voice = "nova"
            response_format = "opus"
            speed = 1.25

            [telemetry]
            filter = "debug"
            format = "json"
        "#;

        let config = Config::from_toml(raw).unwrap();
        config.validate().unwrap();

        assert_eq!(config.server.listen_address_or_default().port(), 8080);
        assert_eq!(config.server.health.path, "/healthz");
        assert_eq!(config.stt.language.as_deref(), Some("en"));
        assert_eq!(config.vision.prompt, "Read the sign.");
        assert_eq!(config.vision.max_tokens, 64);
        assert_eq!(config.tts.response_format, "opus");
        assert_eq!(config.tts.speed, Some(1.25));
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[tts]\nvolume = 11\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn out_of_range_speed_is_rejected() {
        let config = Config::from_toml("[tts]\nspeed = 9.0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tts.speed"));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let config = Config::from_toml("[vision]\nmax_tokens = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn credentials_with_wildcard_origins_is_rejected() {
        let config = Config::from_toml("[server.cors]\ncredentials = true\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("credentials"));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = Config::from_toml("[provider]\nbase_url = \"api.openai.com\"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
