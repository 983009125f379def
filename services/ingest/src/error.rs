//! Error types for event processing.

use fleet_events::ValidationError;
use thiserror::Error;

/// Errors returned by [`EventProcessor::process`](crate::processor::EventProcessor::process).
///
/// Validation is the only failure mode; dispatch and counting cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessingError {
    /// The event was refused before any processing happened.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ProcessingError {
    /// The underlying validation error.
    pub fn validation(&self) -> &ValidationError {
        match self {
            ProcessingError::Validation(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wraps_validation_error() {
        let err = ProcessingError::from(ValidationError::OutOfRange {
            field: "latitude",
            min: -90.0,
            max: 90.0,
        });
        assert_eq!(
            err.to_string(),
            "validation error: latitude must be between -90 and 90"
        );
        assert_eq!(err.validation().field(), "latitude");
    }
}
