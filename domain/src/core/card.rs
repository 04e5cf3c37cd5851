//! Card value object

use serde::{Deserialize, Serialize};

/// Minor arcana suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in deck order
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    /// Icon shown next to suited cards
    pub fn icon(&self) -> &'static str {
        match self {
            Suit::Wands => "🔥",
            Suit::Cups => "🏆",
            Suit::Swords => "⚔️",
            Suit::Pentacles => "🪙",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single card in the catalog (Value Object)
///
/// A card without a suit belongs to the major arcana.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
}

impl Card {
    /// Create a major arcana card
    pub fn major(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suit: None,
        }
    }

    /// Create a suited (minor arcana) card
    pub fn minor(name: impl Into<String>, suit: Suit) -> Self {
        Self {
            name: name.into(),
            suit: Some(suit),
        }
    }

    pub fn is_major(&self) -> bool {
        self.suit.is_none()
    }

    /// Icon for display; major arcana share a single star.
    pub fn icon(&self) -> &'static str {
        self.suit.map(|s| s.icon()).unwrap_or("✨")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Join card names in draw order, the way they appear in the prompt.
pub fn card_info(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
