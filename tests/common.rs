use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use chat_invoker::config::constants::ANTHROPIC_API_VERSION;
use chat_invoker::services::ai_providers::anthropic::AnthropicProvider;
use chat_invoker::structs::api_credential::ApiCredential;

pub const TEST_KEY: &str = "test-key";

pub fn provider_for(server: &MockServer) -> AnthropicProvider {
    AnthropicProvider::new(
        ApiCredential::new(TEST_KEY),
        format!("{}/v1", server.uri()),
        ANTHROPIC_API_VERSION,
    )
}

pub fn text_reply(text: &str) -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-haiku-20241022",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 12, "output_tokens": 34}
    })
}

pub fn error_body(kind: &str, message: &str) -> Value {
    json!({"type": "error", "error": {"type": kind, "message": message}})
}

/// Mounts a `/v1/messages` handler that must be hit exactly once.
pub async fn mount_messages(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", TEST_KEY))
        .and(header("anthropic-version", ANTHROPIC_API_VERSION))
        .and(header("content-type", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
