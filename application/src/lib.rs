//! Application layer for deep-tarot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReadingParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ReadingProgressNotifier},
};
pub use use_cases::draw_reading::DrawReadingUseCase;
pub use use_cases::generate_reading::GenerateReadingUseCase;
