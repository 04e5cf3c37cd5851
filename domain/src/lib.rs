//! Domain layer for deep-tarot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Draw
//!
//! A draw shuffles the whole [`Catalog`] and keeps the first three cards, so
//! a reading never repeats a card.
//!
//! ## Reading
//!
//! The drawn card names and the user's question are substituted into a fixed
//! [`PromptTemplate`]; the backend's answer (or [`FALLBACK_READING`]) becomes
//! the [`Reading`] text.

pub mod config;
pub mod core;
pub mod draw;
pub mod prompt;
pub mod reading;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    card::{Card, Suit, card_info},
    catalog::{Catalog, DRAW_COUNT},
    error::DomainError,
    model::Model,
    question::Question,
};
pub use draw::Selector;
pub use prompt::{CARD_INFO_PLACEHOLDER, PromptTemplate, QUESTION_PLACEHOLDER};
pub use reading::{FALLBACK_READING, Reading, ReadingPhase, SECTION_MARKERS};
