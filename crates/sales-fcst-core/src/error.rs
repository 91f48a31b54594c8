//! Error types for the forecast pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Error types for forecast pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: need at least {needed} rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::InvalidInput("unparseable sale date 'foo'".into());
        assert_eq!(
            format!("{}", err),
            "Invalid input: unparseable sale date 'foo'"
        );

        let err = PipelineError::InsufficientData { needed: 1, got: 0 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data: need at least 1 rows, got 0"
        );
    }
}
