//! Gemini gateway
//!
//! Implements the `LlmGateway` port over the Generative Language REST API.
//! The credential is resolved once at startup and shared read-only by every
//! session.

use super::session::GeminiSession;
use crate::config::{ApiKey, FileGeminiConfig};
use async_trait::async_trait;
use std::time::Duration;
use tarot_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use tarot_domain::Model;
use tracing::info;

/// Runtime settings for [`GeminiLlmGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: ApiKey,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Build from the `[gemini]` section, resolving the API key now.
    pub fn from_file_config(config: &FileGeminiConfig) -> Self {
        Self {
            base_url: config.base_url.trim().to_string(),
            api_key: config.resolve_api_key(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub struct GeminiLlmGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiLlmGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            has_key = !config.api_key.is_empty(),
            "Gemini gateway initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            &self.config.base_url,
            model.clone(),
            self.config.api_key.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_application::{GenerateReadingUseCase, ReadingParams};
    use tarot_domain::{Card, FALLBACK_READING};

    fn gateway(base_url: &str, key: &str) -> GeminiLlmGateway {
        GeminiLlmGateway::new(GeminiConfig {
            base_url: base_url.to_string(),
            api_key: ApiKey::new(key),
            timeout: Some(Duration::from_secs(5)),
        })
        .unwrap()
    }

    fn cards() -> Vec<Card> {
        vec![
            Card::major("CardA"),
            Card::major("CardB"),
            Card::major("CardC"),
        ]
    }

    #[test]
    fn test_config_from_file_config() {
        let file = FileGeminiConfig {
            api_key: Some("k".to_string()),
            base_url: " http://localhost:1 ".to_string(),
            timeout_secs: Some(12),
            ..Default::default()
        };
        let config = GeminiConfig::from_file_config(&file);
        assert_eq!(config.base_url, "http://localhost:1");
        assert_eq!(config.api_key.expose(), "k");
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
    }

    #[tokio::test]
    async fn test_session_uses_requested_model() {
        let gateway = gateway("http://localhost", "k");
        let session = gateway.create_session(&Model::Gemini25Pro).await.unwrap();
        assert_eq!(session.model(), &Model::Gemini25Pro);
    }

    #[tokio::test]
    async fn test_reading_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash-lite:generateContent")
            .match_header("x-goog-api-key", "secret")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::Regex("Will I find love\\?".to_string()),
                mockito::Matcher::Regex("CardA, CardB, CardC".to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"OK"}]}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let use_case = GenerateReadingUseCase::new(
            std::sync::Arc::new(gateway(&server.url(), "secret")),
            ReadingParams::default(),
        );
        let text = use_case.execute("Will I find love?", &cards()).await;

        assert_eq!(text, "OK");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_after_one_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash-lite:generateContent")
            .with_status(400)
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .expect(1)
            .create_async()
            .await;

        let use_case = GenerateReadingUseCase::new(
            std::sync::Arc::new(gateway(&server.url(), "")),
            ReadingParams::default(),
        );
        let text = use_case.execute("Q?", &cards()).await;

        assert_eq!(text, FALLBACK_READING);
        mock.assert_async().await;
    }
}
