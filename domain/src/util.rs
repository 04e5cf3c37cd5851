//! Shared utility functions.

/// Shorten text for log lines.
///
/// Keeps at most `max_chars` characters, never splitting a UTF-8 character,
/// collapses newlines to spaces, and appends `…` when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flattened: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut out: String = flattened.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello…");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        assert_eq!(preview("🛑🃏🔮🧠", 2), "🛑🃏…");
        assert_eq!(preview("🛑🃏🔮🧠", 4), "🛑🃏🔮🧠");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\n\nb", 10), "a  b");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(preview("", 10), "");
    }
}
