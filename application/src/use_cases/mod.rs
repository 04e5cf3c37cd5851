//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod draw_reading;
pub mod generate_reading;
