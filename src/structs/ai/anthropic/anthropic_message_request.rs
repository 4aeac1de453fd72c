use serde::Serialize;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnthropicMessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
}
