//! Card catalog
//!
//! The catalog is the fixed, ordered set of cards a draw is taken from.
//! The standard Rider–Waite deck is built once per process and never mutated.

use super::card::{Card, Suit};
use super::error::DomainError;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Number of cards in a reading
pub const DRAW_COUNT: usize = 3;

const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

const RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    let mut cards: Vec<Card> = MAJOR_ARCANA.iter().map(|name| Card::major(*name)).collect();
    for suit in Suit::ALL {
        cards.extend(
            RANKS
                .iter()
                .map(|rank| Card::minor(format!("{} of {}", rank, suit), suit)),
        );
    }
    Catalog { cards }
});

/// Immutable, duplicate-free collection of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and catalogs smaller than
    /// [`DRAW_COUNT`].
    pub fn new(cards: Vec<Card>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.name.as_str()) {
                return Err(DomainError::DuplicateCard(card.name.clone()));
            }
        }

        let catalog = Self { cards };
        catalog.ensure_drawable(DRAW_COUNT)?;
        Ok(catalog)
    }

    /// The process-wide standard 78-card deck
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Check that `count` distinct cards can be drawn
    pub fn ensure_drawable(&self, count: usize) -> Result<(), DomainError> {
        if self.cards.len() < count {
            return Err(DomainError::CatalogTooSmall {
                size: self.cards.len(),
                required: count,
            });
        }
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    pub fn major_arcana(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_major())
    }

    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == Some(suit))
    }
}
