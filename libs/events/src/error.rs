//! Error types for event validation.

use thiserror::Error;

/// Reasons a [`VehicleEvent`](crate::VehicleEvent) is refused.
///
/// Every variant is caller-correctable; resubmitting the same event yields
/// the same error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is empty or unset.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A bounded numeric field is outside its inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A numeric field that must be non-negative is negative.
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative(field) => field,
        }
    }
}
