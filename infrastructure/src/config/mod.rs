//! Configuration file loading for deep-tarot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEEP_TAROT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tarot.toml` or `./.tarot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/deep-tarot/config.toml`
//! 5. Default values

mod credentials;
mod file_config;
mod loader;

pub use credentials::ApiKey;
pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileReadingConfig,
    FileReplConfig,
};
pub use loader::{ConfigError, ConfigLoader};
