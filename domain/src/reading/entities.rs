//! Reading entities

use crate::core::card::Card;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single reading request
///
/// `Idle → Requesting → {Succeeded, Failed}`; both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingPhase {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl ReadingPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingPhase::Idle => "idle",
            ReadingPhase::Requesting => "requesting",
            ReadingPhase::Succeeded => "succeeded",
            ReadingPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReadingPhase::Succeeded | ReadingPhase::Failed)
    }
}

impl std::fmt::Display for ReadingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A finished reading: the question, the draw, and the text to render
///
/// `text` is either the backend's answer or [`FALLBACK_READING`](crate::FALLBACK_READING);
/// the two are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub question: Question,
    pub cards: Vec<Card>,
    pub text: String,
}

impl Reading {
    pub fn new(question: Question, cards: Vec<Card>, text: impl Into<String>) -> Self {
        Self {
            question,
            cards,
            text: text.into(),
        }
    }

    /// Card names joined in draw order
    pub fn card_info(&self) -> String {
        crate::core::card::card_info(&self.cards)
    }
}
