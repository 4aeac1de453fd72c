use crate::config::constants::ANSWER_LABEL;
use crate::enums::chat_error::ChatError;
use crate::enums::content_block::ContentBlock;
use crate::enums::invoker_state::InvokerState;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::structs::ai::anthropic::anthropic_message_response::AnthropicMessageResponse;
use crate::structs::invoker_settings::InvokerSettings;
use crate::traits::ai_provider::AiProvider;

/// Sends one user prompt and narrows the reply to its first text block.
pub struct ChatInvoker<P: AiProvider> {
    provider: P,
    settings: InvokerSettings,
    state: InvokerState,
}

impl<P: AiProvider> ChatInvoker<P> {

    pub fn new(provider: P, settings: InvokerSettings) -> Self {
        Self {
            provider,
            settings,
            state: InvokerState::Idle,
        }
    }

    /// State of the most recent round trip.
    pub const fn state(&self) -> InvokerState {
        self.state
    }

    pub fn build_request(&self) -> AnthropicMessageRequest {
        AnthropicMessageRequest {
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            messages: vec![AnthropicMessage::user_text(self.settings.prompt.clone())],
        }
    }

    /// Performs exactly one provider call.
    pub async fn invoke(&mut self) -> Result<String, ChatError> {
        let request = self.build_request();
        self.transition(InvokerState::Calling);

        let outcome = match self.provider.send(&request).await {
            Ok(response) => Self::extract_reply(&response),
            Err(e) => Err(ChatError::Provider(e)),
        };

        match &outcome {
            Ok(_) => self.transition(InvokerState::Done),
            Err(e) => {
                log::debug!("Round trip aborted: {}", e);
                self.transition(InvokerState::Aborted);
            }
        }

        outcome
    }

    pub fn extract_reply(response: &AnthropicMessageResponse) -> Result<String, ChatError> {
        if let Some(usage) = response.usage {
            log::debug!("Usage: {} input / {} output tokens", usage.input_tokens, usage.output_tokens);
        }

        match response.content.first() {
            None => Err(ChatError::EmptyContent),
            Some(ContentBlock::Text { text }) => Ok(text.clone()),
            Some(other) => Err(ChatError::UnexpectedContent {
                kind: other.kind().to_string(),
            }),
        }
    }

    fn transition(&mut self, next: InvokerState) {
        log::debug!("Invoker {} -> {}", self.state, next);
        self.state = next;
    }
}

pub fn format_answer(reply: &str) -> String {
    format!("{}{}\n", ANSWER_LABEL, reply)
}
