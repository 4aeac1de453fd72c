use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;

/// Everything one round trip needs besides the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerSettings {
    pub model: String,
    pub max_tokens: u32,
    pub prompt: String,
}

impl Default for InvokerSettings {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            prompt: ConfigHelper::default_prompt(),
        }
    }
}

impl From<&Config> for InvokerSettings {
    fn from(config: &Config) -> Self {
        Self {
            model: config.ai.model.clone(),
            max_tokens: config.ai.max_tokens,
            prompt: config.prompt.text.clone(),
        }
    }
}
