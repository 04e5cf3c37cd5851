//! Gemini LLM session implementation
//!
//! One `generateContent` call per `send`. The API is stateless and readings
//! are single-turn, so the session keeps no history.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::ApiKey;
use async_trait::async_trait;
use tarot_application::ports::llm_gateway::{GatewayError, LlmSession};
use tarot_domain::Model;
use tarot_domain::util::preview;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest error body kept in a [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY_CHARS: usize = 300;

pub struct GeminiSession {
    client: reqwest::Client,
    model: Model,
    endpoint: String,
    api_key: ApiKey,
}

impl GeminiSession {
    pub fn new(client: reqwest::Client, base_url: &str, model: Model, api_key: ApiKey) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model.as_str()
        );
        Self {
            client,
            model,
            endpoint,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        debug!(
            model = %self.model,
            "POST {} ({} prompt bytes)",
            self.endpoint,
            content.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&GenerateContentRequest::from_prompt(content))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: preview(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("{}: {}", e, preview(&body, 120))))?;

        if let Some(reason) = parsed.block_reason() {
            return Err(GatewayError::RequestFailed(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        parsed.text().ok_or(GatewayError::EmptyResponse)
    }
}
