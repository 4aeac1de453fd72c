use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::structs::ai::anthropic::anthropic_message_response::AnthropicMessageResponse;
use crate::structs::ai::api_error::ApiErrorEnvelope;
use crate::structs::api_credential::ApiCredential;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone, Debug)]
pub struct AnthropicProvider {
    credential: ApiCredential,
    base_url: String,
    api_version: String,
    client: Client,
}

impl AnthropicProvider {

    pub fn new(credential: ApiCredential, base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            credential,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AiProviderError> {
        let credential = ApiCredential::resolve(&config.api_key, &config.api_key_env);
        let mut provider = Self::new(credential, config.base_url.clone(), config.api_version.clone());

        if let Some(secs) = config.timeout_secs {
            provider.client = Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()
                .map_err(|e| AiProviderError::network(&e))?;
        }

        Ok(provider)
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    async fn make_request(&self, request_body: &AnthropicMessageRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.credential.expose())
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::network(&e))
    }

    fn classify_failure(status: StatusCode, body: &str) -> AiProviderError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.to_string()
                }
            });

        match status.as_u16() {
            401 => AiProviderError::AuthenticationError(message),
            429 => AiProviderError::RateLimitError(message),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, message)),
        }
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {

    async fn send(&self, request: &AnthropicMessageRequest) -> Result<AnthropicMessageResponse, AiProviderError> {
        let response = self.make_request(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            log::error!("❌ API Error Response: {}", error_text);

            return Err(Self::classify_failure(status, &error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AiProviderError::network(&e))?;

        serde_json::from_str::<AnthropicMessageResponse>(&body)
            .map_err(|e| AiProviderError::SerializationError(format!("Failed to parse response: {}", e)))
    }
}
