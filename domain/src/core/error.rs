//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised while building the catalog or validating input, never
/// during a reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Catalog has {size} cards but a draw needs {required}")]
    CatalogTooSmall { size: usize, required: usize },

    #[error("Duplicate card in catalog: {0}")]
    DuplicateCard(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_too_small_display() {
        let error = DomainError::CatalogTooSmall {
            size: 2,
            required: 3,
        };
        assert_eq!(error.to_string(), "Catalog has 2 cards but a draw needs 3");
    }

    #[test]
    fn test_duplicate_card_display() {
        let error = DomainError::DuplicateCard("The Fool".to_string());
        assert_eq!(error.to_string(), "Duplicate card in catalog: The Fool");
    }
}
