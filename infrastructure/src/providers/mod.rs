//! Generative backend adapters

pub mod gemini;
