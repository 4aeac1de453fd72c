use serde::Deserialize;
use crate::enums::content_block::ContentBlock;
use crate::enums::role::Role;
use crate::structs::ai::anthropic::anthropic_usage::AnthropicUsage;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnthropicMessageResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default = "default_role")]
    pub role: Role,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<AnthropicUsage>,
}

const fn default_role() -> Role {
    Role::Assistant
}

impl AnthropicMessageResponse {
    pub fn with_content(content: Vec<ContentBlock>) -> Self {
        Self {
            id: String::new(),
            model: String::new(),
            role: Role::Assistant,
            content,
            stop_reason: None,
            usage: None,
        }
    }
}
