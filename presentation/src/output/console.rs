//! Console output formatter for readings

use colored::Colorize;
use tarot_domain::{Card, Catalog, OutputFormat, Reading, Suit};

/// Formats readings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a reading in the requested format
    pub fn render(reading: &Reading, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(reading),
            OutputFormat::Plain => Self::format_plain(reading),
            OutputFormat::Json => Self::format_json(reading),
        }
    }

    /// Format the complete reading: question, cards, text
    pub fn format(reading: &Reading) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Deep Tarot"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            reading.question
        ));

        output.push_str(&format!("{}\n", "Cards:".cyan().bold()));
        output.push_str(&Self::format_cards(&reading.cards));
        output.push('\n');

        output.push_str(&format!("{}\n\n", "─".repeat(60).dimmed()));
        output.push_str(reading.text.trim_end());
        output.push('\n');

        output.push_str(&Self::footer());

        output
    }

    /// Reading text only
    pub fn format_plain(reading: &Reading) -> String {
        format!("{}\n", reading.text.trim_end())
    }

    /// Format as JSON
    pub fn format_json(reading: &Reading) -> String {
        serde_json::to_string_pretty(reading).unwrap_or_else(|_| "{}".to_string())
    }

    /// One numbered line per card, in draw order
    pub fn format_cards(cards: &[Card]) -> String {
        let mut output = String::new();
        for (i, card) in cards.iter().enumerate() {
            let arcana = if card.is_major() {
                "Major Arcana".to_string()
            } else {
                card.suit.map(|s| s.to_string()).unwrap_or_default()
            };
            output.push_str(&format!(
                "  {}. {} {} {}\n",
                i + 1,
                card.icon(),
                card.name.yellow().bold(),
                format!("({})", arcana).dimmed()
            ));
        }
        output
    }

    /// The whole deck, grouped by arcana
    pub fn format_deck(catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "✨ Major Arcana:".cyan().bold(),
            Self::join_names(catalog.major_arcana())
        ));
        for suit in Suit::ALL {
            output.push_str(&format!(
                "{} {}\n",
                format!("{} {}:", suit.icon(), suit).cyan().bold(),
                Self::join_names(catalog.suit(suit))
            ));
        }
        output.push_str(&format!("{} cards\n", catalog.len()));
        output
    }

    fn join_names<'a>(cards: impl Iterator<Item = &'a Card>) -> String {
        cards
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "╭──────────────────────────────────────────────╮".magenta(),
            format!("│{:^46}│", title).magenta().bold(),
            "╰──────────────────────────────────────────────╯".magenta()
        )
    }

    fn footer() -> String {
        format!("\n{}\n", "─".repeat(60).dimmed())
    }
}
