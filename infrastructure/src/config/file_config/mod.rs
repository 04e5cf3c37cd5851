//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod reading;
mod repl;

pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;
pub use reading::FileReadingConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("gemini.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend settings
    pub gemini: FileGeminiConfig,
    /// Reading settings
    pub reading: FileReadingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }

        let base_url = self.gemini.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        if self.gemini.timeout_secs == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.gemini.api_key_env.trim().is_empty() && self.gemini.api_key.is_none() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "GEMINI_API_KEY"
base_url = "http://localhost:8080"
model = "gemini-2.5-pro"
timeout_secs = 30

[reading]
template_path = "prompts/reading.txt"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/deep-tarot/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.parse_model(), Model::Gemini25Pro);
        assert_eq!(config.gemini.timeout_secs, Some(30));
        assert_eq!(
            config.reading.template_path.as_deref(),
            Some(std::path::Path::new("prompts/reading.txt"))
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.parse_model(), Model::Gemini25Flash);
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "API_KEY");
        assert!(config.reading.template_path.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.gemini.model = "  ".to_string();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();
        config.gemini.timeout_secs = Some(0);
        config.gemini.api_key_env = String::new();

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::InvalidBaseUrl(
                    "generativelanguage.googleapis.com".to_string()
                ),
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::EmptyApiKeyEnv,
            ]
        );
    }
}
