//! Prompt domain
//!
//! The reading template and the literal substitution that turns it into the
//! final prompt.

mod template;

pub use template::{CARD_INFO_PLACEHOLDER, PromptTemplate, QUESTION_PLACEHOLDER};
