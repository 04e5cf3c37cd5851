//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The question a reading answers (Value Object)
///
/// Always non-empty. The text is kept verbatim, surrounding whitespace
/// included, because it is substituted into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("Will I find love?").unwrap();
        assert_eq!(q.content(), "Will I find love?");
    }

    #[test]
    fn test_question_try_from_str() {
        let q: Question = "Should I move?".try_into().unwrap();
        assert_eq!(q.to_string(), "Should I move?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_err());
        assert!(Question::try_new("   ").is_err());
        assert!(Question::try_new("\n\t").is_err());
    }

    #[test]
    fn test_content_kept_verbatim() {
        let q = Question::try_new("  padded  ").unwrap();
        assert_eq!(q.into_content(), "  padded  ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let q = Question::try_new("Why?").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), r#""Why?""#);
    }
}
