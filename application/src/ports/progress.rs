//! Progress notification port
//!
//! Defines the interface for reporting progress while a reading is produced.

use tarot_domain::{Card, ReadingPhase};

/// Callback for progress updates during a reading
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ReadingProgressNotifier: Send + Sync {
    /// Called once the cards for a reading have been drawn
    fn on_cards_drawn(&self, cards: &[Card]);

    /// Called on every phase transition
    fn on_phase(&self, phase: ReadingPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReadingProgressNotifier for NoProgress {
    fn on_cards_drawn(&self, _cards: &[Card]) {}
    fn on_phase(&self, _phase: ReadingPhase) {}
}
