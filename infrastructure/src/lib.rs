//! Infrastructure layer for deep-tarot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig,
    FileOutputConfig, FileReadingConfig, FileReplConfig,
};
pub use prompt::{TemplateError, TemplateLoader};
pub use providers::gemini::{GeminiConfig, GeminiLlmGateway, GeminiSession};
