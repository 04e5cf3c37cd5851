//! Application-level configuration.
//!
//! - [`ReadingParams`]: model and prompt template used for every reading

pub mod reading_params;

pub use reading_params::ReadingParams;
