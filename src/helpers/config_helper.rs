use crate::config::constants::{
    ANTHROPIC_API_KEY_ENV, ANTHROPIC_API_VERSION, ANTHROPIC_BASE_URL, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, DEFAULT_PROMPT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub const fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_prompt() -> String {
        DEFAULT_PROMPT.to_string()
    }

    pub fn default_api_key_env() -> String {
        ANTHROPIC_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        ANTHROPIC_BASE_URL.to_string()
    }

    pub fn default_api_version() -> String {
        ANTHROPIC_API_VERSION.to_string()
    }
}
