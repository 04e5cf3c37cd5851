//! Presentation layer for deep-tarot
//!
//! This crate contains the CLI definition, output formatters,
//! progress reporters, markdown export and the interactive REPL.

pub mod cli;
pub mod config;
pub mod export;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use export::markdown::{ExportError, ReadingExporter};
pub use output::console::ConsoleFormatter;
pub use output::set_color_enabled;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::gate::{DrawGate, DrawGuard};
pub use repl::reading::{ReadingRepl, ReplCommand};
