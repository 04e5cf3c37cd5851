//! Draw domain
//!
//! Random, duplicate-free selection of cards from a [`Catalog`](crate::Catalog).

mod selector;

pub use selector::Selector;
