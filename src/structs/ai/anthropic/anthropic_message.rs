use serde::{Deserialize, Serialize};
use crate::enums::content_block::ContentBlock;
use crate::enums::role::Role;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnthropicMessage {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl AnthropicMessage {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::text(text)],
        }
    }
}
