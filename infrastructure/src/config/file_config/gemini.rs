//! Gemini provider configuration from TOML (`[gemini]` section)

use crate::config::credentials::ApiKey;
use serde::{Deserialize, Serialize};
use tarot_domain::Model;
use tracing::warn;

/// Generative Language API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model every reading is generated with.
    pub model: String,
    /// Request timeout; unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: Model::default().to_string(),
            timeout_secs: None,
        }
    }
}

impl FileGeminiConfig {
    pub fn parse_model(&self) -> Model {
        Model::from(self.model.trim())
    }

    /// Resolve the API key: explicit `api_key` first, then the environment.
    ///
    /// A missing key is not an error here. The key resolves to empty, and the
    /// first request is rejected by the backend instead.
    pub fn resolve_api_key(&self) -> ApiKey {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> ApiKey {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return ApiKey::new(key.trim());
        }

        match lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()) {
            Some(key) => ApiKey::new(key.trim()),
            None => {
                warn!(
                    "{} is not set; readings will fall back until a key is configured",
                    self.api_key_env
                );
                ApiKey::empty()
            }
        }
    }
}
