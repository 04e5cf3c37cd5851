//! Progress reporting while a reading is requested

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tarot_application::ReadingProgressNotifier;
use tarot_domain::{Card, ReadingPhase};

/// Spinner on stderr while the backend call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .tick_strings(&["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", "✨"])
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingProgressNotifier for ProgressReporter {
    // The rendered reading lists the cards; the spinner only shows the phase
    fn on_cards_drawn(&self, _cards: &[Card]) {}

    fn on_phase(&self, phase: ReadingPhase) {
        let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        match phase {
            ReadingPhase::Requesting => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Connecting to the subconscious...");
                pb.enable_steady_tick(Duration::from_millis(120));
                *spinner = Some(pb);
            }
            // Success and fallback look the same to the user
            ReadingPhase::Succeeded | ReadingPhase::Failed => {
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }
            }
            ReadingPhase::Idle => {}
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ReadingProgressNotifier for SimpleProgress {
    fn on_cards_drawn(&self, cards: &[Card]) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            cards
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    fn on_phase(&self, phase: ReadingPhase) {
        if phase == ReadingPhase::Requesting {
            eprintln!("{} {}", "->".cyan(), "Reading the cards...".bold());
        }
    }
}
