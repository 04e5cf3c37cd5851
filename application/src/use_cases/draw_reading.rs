//! Draw Reading use case.
//!
//! The full user action: draw three cards, then generate the reading for
//! them. The result bundles question, cards and text for the presentation
//! layer.

use crate::config::ReadingParams;
use crate::ports::progress::ReadingProgressNotifier;
use crate::use_cases::generate_reading::GenerateReadingUseCase;
use tarot_domain::{Card, Question, Reading, Selector};
use tracing::info;

/// Use case for a complete draw + reading.
#[derive(Clone)]
pub struct DrawReadingUseCase<'a> {
    selector: Selector<'a>,
    reading: GenerateReadingUseCase,
}

impl<'a> DrawReadingUseCase<'a> {
    pub fn new(selector: Selector<'a>, reading: GenerateReadingUseCase) -> Self {
        Self { selector, reading }
    }

    pub fn selector(&self) -> &Selector<'a> {
        &self.selector
    }

    pub fn reading_params(&self) -> &ReadingParams {
        self.reading.params()
    }

    /// Draw cards for `question` and generate their reading.
    pub async fn execute(&self, question: Question, progress: &dyn ReadingProgressNotifier) -> Reading {
        let cards = self.selector.draw();
        self.execute_with_cards(question, cards, progress).await
    }

    /// Generate the reading for an already drawn set of cards.
    pub async fn execute_with_cards(
        &self,
        question: Question,
        cards: Vec<Card>,
        progress: &dyn ReadingProgressNotifier,
    ) -> Reading {
        info!(
            "Drew {}",
            cards
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        );
        progress.on_cards_drawn(&cards);

        let text = self
            .reading
            .execute_with_progress(question.content(), &cards, progress)
            .await;

        Reading::new(question, cards, text)
    }
}
