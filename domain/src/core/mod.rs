//! Core domain concepts shared across all subdomains.
//!
//! - [`card::Card`]: a named card, optionally tagged with a suit
//! - [`catalog::Catalog`]: the immutable deck a draw is taken from
//! - [`model::Model`]: backend models a reading can be generated with
//! - [`question::Question`]: a validated, non-empty question
//! - [`error::DomainError`]: domain-level errors

pub mod card;
pub mod catalog;
pub mod error;
pub mod model;
pub mod question;
