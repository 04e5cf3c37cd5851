//! Reading configuration from TOML (`[reading]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw reading configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReadingConfig {
    /// File holding a custom prompt template; the built-in one is used when unset
    pub template_path: Option<PathBuf>,
}
