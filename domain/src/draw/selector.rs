//! Card selector
//!
//! Shuffles the whole catalog and keeps the first `draw_count` cards. A
//! permutation of a duplicate-free catalog cannot repeat a card, and every
//! k-subset is equally likely. Uses the non-cryptographic thread-local PRNG.

use crate::core::card::Card;
use crate::core::catalog::{Catalog, DRAW_COUNT};
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws cards from a catalog
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
    draw_count: usize,
}

impl<'a> Selector<'a> {
    /// Create a selector for the standard three-card draw.
    ///
    /// Fails when the catalog cannot supply [`DRAW_COUNT`] distinct cards.
    pub fn new(catalog: &'a Catalog) -> Result<Self, DomainError> {
        Self::with_draw_count(catalog, DRAW_COUNT)
    }

    pub fn with_draw_count(catalog: &'a Catalog, draw_count: usize) -> Result<Self, DomainError> {
        catalog.ensure_drawable(draw_count)?;
        Ok(Self {
            catalog,
            draw_count,
        })
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Draw using the thread-local generator
    pub fn draw(&self) -> Vec<Card> {
        self.draw_with(&mut rand::rng())
    }

    /// Draw using the given generator
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.catalog.cards().to_vec();
        cards.shuffle(rng);
        cards.truncate(self.draw_count);
        cards
    }
}
