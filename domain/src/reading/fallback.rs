//! Static reading returned when the backend cannot be reached

/// Paragraph markers every reading starts its sections with
pub const SECTION_MARKERS: [&str; 4] = ["🛑", "🃏", "🔮", "🧠"];

/// Substitute reading, shaped like a real one so renderers need no special case.
pub const FALLBACK_READING: &str = "🛑 Signal interrupted.\n\n\
🃏 The energy flow encountered a blockage in the deep subconscious.\n\n\
🔮 Please try reconnecting later and draw again.\n\n\
🧠 What would you ask if you knew the answer was already waiting for you?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_four_marked_paragraphs() {
        let paragraphs: Vec<_> = FALLBACK_READING.split("\n\n").collect();
        assert_eq!(paragraphs.len(), SECTION_MARKERS.len());
        for (paragraph, marker) in paragraphs.iter().zip(SECTION_MARKERS) {
            assert!(paragraph.starts_with(marker), "{:?}", paragraph);
        }
    }

    #[test]
    fn test_fallback_opens_with_signal_interrupted() {
        assert!(FALLBACK_READING.starts_with("🛑 Signal interrupted."));
    }
}
