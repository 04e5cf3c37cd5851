//! Prompt template loading

mod loader;

pub use loader::{TemplateError, TemplateLoader};
