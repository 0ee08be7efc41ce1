//! Error types for u-assign.

use thiserror::Error;

use crate::validation::ValidationError;

/// Top-level error type for assignment optimization.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignError {
    /// Run parameters are out of range. Raised before any generation starts.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A solution references a work item that is not part of the problem.
    #[error("Unknown work item id: {0}")]
    UnknownWorkItem(u32),

    /// A solution references a worker that is not part of the problem.
    #[error("Unknown worker id: {0}")]
    UnknownWorker(u32),

    /// Load balance is undefined without at least one worker.
    #[error("No workers available: load spread is undefined")]
    NoWorkers,

    /// A load sum or cost left the finite range of `f64`.
    #[error("Numerical overflow: {0}")]
    Numerical(String),

    /// Domain data failed input validation.
    #[error("Invalid input: {} issue(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Result type alias for assignment operations.
pub type AssignResult<T> = Result<T, AssignError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_display() {
        let err = AssignError::UnknownWorkItem(7);
        assert_eq!(err.to_string(), "Unknown work item id: 7");

        let err = AssignError::Configuration("population_size must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: population_size must be >= 2"
        );

        assert_eq!(
            AssignError::NoWorkers.to_string(),
            "No workers available: load spread is undefined"
        );

        let err = AssignError::Numerical("cost is inf".to_string());
        assert_eq!(err.to_string(), "Numerical overflow: cost is inf");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = AssignError::InvalidInput(vec![ValidationError {
            kind: ValidationErrorKind::DuplicateId,
            message: "Duplicate worker ID: 1".to_string(),
        }]);
        assert_eq!(
            err.to_string(),
            "Invalid input: 1 issue(s), first: Duplicate worker ID: 1"
        );
    }
}
