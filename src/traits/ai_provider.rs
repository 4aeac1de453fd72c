use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::structs::ai::anthropic::anthropic_message_response::AnthropicMessageResponse;

/// The text-generation service as the invoker sees it.
///
/// One `send` is one outbound call. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    async fn send(&self, request: &AnthropicMessageRequest) -> Result<AnthropicMessageResponse, AiProviderError>;
}
