use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_api_version")]
    pub api_version: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            api_key: String::new(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            api_version: ConfigHelper::default_api_version(),
            timeout_secs: None,
        }
    }
}
