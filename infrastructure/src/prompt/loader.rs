//! Reads a custom prompt template from disk at startup

use std::path::{Path, PathBuf};
use tarot_domain::PromptTemplate;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read prompt template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt template {0} is empty")]
    Empty(PathBuf),
}

/// Loads prompt templates
pub struct TemplateLoader;

impl TemplateLoader {
    /// The configured template, or the built-in one when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<PromptTemplate, TemplateError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(PromptTemplate::reading()),
        }
    }

    /// Read a template file.
    ///
    /// A template without one of the placeholders is still accepted; that
    /// value is then simply absent from the prompt.
    pub fn load(path: &Path) -> Result<PromptTemplate, TemplateError> {
        let text = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if text.trim().is_empty() {
            return Err(TemplateError::Empty(path.to_path_buf()));
        }

        let template = PromptTemplate::new(text);
        for placeholder in template.missing_placeholders() {
            warn!(
                "Prompt template {} has no {} placeholder",
                path.display(),
                placeholder
            );
        }

        info!("Loaded prompt template from {}", path.display());
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_when_unset() {
        let template = TemplateLoader::load_or_default(None).unwrap();
        assert_eq!(template, PromptTemplate::reading());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Q={{question}} C={{cardInfo}}").unwrap();

        let template = TemplateLoader::load_or_default(Some(file.path())).unwrap();
        assert_eq!(template.text(), "Q={question} C={cardInfo}");
        assert_eq!(template.compile("why", "A, B, C"), "Q=why C=A, B, C");
    }

    #[test]
    fn test_template_without_placeholders_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Just tell me something nice.").unwrap();

        let template = TemplateLoader::load(file.path()).unwrap();
        assert_eq!(template.missing_placeholders().len(), 2);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateLoader::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = TemplateLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, TemplateError::Empty(_)));
    }
}
