use serde::{Deserialize, Serialize};
use crate::enums::commands::AskArgs;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::prompt_config::PromptConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Config {
    /// Command-line flags win over the file.
    pub fn apply_overrides(&mut self, args: &AskArgs) {
        if let Some(prompt) = &args.prompt {
            self.prompt.text.clone_from(prompt);
        }
        if let Some(model) = &args.model {
            self.ai.model.clone_from(model);
        }
        if let Some(max_tokens) = args.max_tokens {
            self.ai.max_tokens = max_tokens;
        }
    }
}
