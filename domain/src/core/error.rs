//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid chunk configuration: {0}")]
    InvalidChunkConfig(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let error = DomainError::DimensionMismatch {
            expected: 768,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Embedding dimension mismatch: expected 768, got 3"
        );
    }
}
