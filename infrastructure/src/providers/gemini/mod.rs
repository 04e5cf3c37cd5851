//! Google Generative Language (Gemini) provider
//!
//! `POST {base_url}/v1beta/models/{model}:generateContent`, authenticated with
//! the `x-goog-api-key` header.

mod gateway;
mod session;
pub mod types;

pub use gateway::{GeminiConfig, GeminiLlmGateway};
pub use session::GeminiSession;
