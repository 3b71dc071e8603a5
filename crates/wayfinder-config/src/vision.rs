use serde::Deserialize;

/// Prompt sent alongside every sign photo
pub const DEFAULT_SIGN_PROMPT: &str = "EXTRACT TEXT ONLY. Look closely at the image. Read the big illuminated text on the \
     signboard. Ignore background items. If it says 'RADIOLOGY', output 'Radiology'. Just the text.";

/// Sign reading settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisionConfig {
    /// Vision-capable chat model
    #[serde(default = "default_model")]
    pub model: String,
    /// Extraction prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            prompt: default_prompt(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_prompt() -> String {
    DEFAULT_SIGN_PROMPT.to_string()
}

const fn default_max_tokens() -> u32 {
    300
}
