//! Reading domain
//!
//! The result of one question + one draw, its lifecycle, and the fallback
//! text used when the backend fails.

pub mod entities;
pub mod fallback;

pub use entities::{Reading, ReadingPhase};
pub use fallback::{FALLBACK_READING, SECTION_MARKERS};
