use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    #[serde(default = "ConfigHelper::default_prompt")]
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: ConfigHelper::default_prompt(),
        }
    }
}
