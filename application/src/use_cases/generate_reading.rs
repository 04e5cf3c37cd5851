//! Generate Reading use case.
//!
//! Turns a question and a set of drawn cards into reading text:
//! 1. Join the card names in draw order (`"A, B, C"`)
//! 2. Substitute question and card names into the prompt template
//! 3. Send the prompt to the backend in a single, non-streaming request
//! 4. Return the response text verbatim
//!
//! This use case is the error boundary of the pipeline. Any backend failure is
//! logged and replaced by [`FALLBACK_READING`]; callers always get a string.
//! There is no retry; the user draws again.

use crate::config::ReadingParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ReadingProgressNotifier};
use std::sync::Arc;
use tarot_domain::util::preview;
use tarot_domain::{Card, FALLBACK_READING, ReadingPhase, card_info};
use tracing::{debug, info, warn};

/// Use case for producing the text of one reading.
///
/// Holds no mutable state; clones share the gateway and parameters and may
/// run concurrently.
#[derive(Clone)]
pub struct GenerateReadingUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: Arc<ReadingParams>,
}

impl GenerateReadingUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: ReadingParams) -> Self {
        Self {
            gateway,
            params: Arc::new(params),
        }
    }

    pub fn params(&self) -> &ReadingParams {
        &self.params
    }

    /// Generate a reading for `question` and `cards`.
    pub async fn execute(&self, question: &str, cards: &[Card]) -> String {
        self.execute_with_progress(question, cards, &NoProgress)
            .await
    }

    /// Generate a reading, reporting phase transitions to `progress`.
    pub async fn execute_with_progress(
        &self,
        question: &str,
        cards: &[Card],
        progress: &dyn ReadingProgressNotifier,
    ) -> String {
        progress.on_phase(ReadingPhase::Requesting);

        match self.request_reading(question, cards).await {
            Ok(text) => {
                info!("Reading received ({} bytes)", text.len());
                progress.on_phase(ReadingPhase::Succeeded);
                text
            }
            Err(e) => {
                warn!(
                    model = %self.params.model,
                    "Error generating reading, using fallback: {}",
                    e
                );
                progress.on_phase(ReadingPhase::Failed);
                FALLBACK_READING.to_string()
            }
        }
    }

    async fn request_reading(&self, question: &str, cards: &[Card]) -> Result<String, GatewayError> {
        let card_info = card_info(cards);
        let prompt = self.params.template.compile(question, &card_info);

        debug!(
            "Requesting reading: question=\"{}\" cards=[{}] prompt_bytes={}",
            preview(question, 80),
            card_info,
            prompt.len()
        );

        let session = self.gateway.create_session(&self.params.model).await?;
        let text = session.send(&prompt).await?;

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
