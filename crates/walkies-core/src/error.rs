//! Error types for the walkies core library.

use thiserror::Error;

/// Comprehensive error type for all store, schedule and booking operations.
#[derive(Error, Debug)]
pub enum WalkiesError {
    /// Dog not found for the given ID
    #[error("Dog with ID {id} not found")]
    DogNotFound { id: u64 },
    /// Walker not found for the given ID
    #[error("Walker with ID {id} not found")]
    WalkerNotFound { id: u64 },
    /// Recurring plan not found for the given ID
    #[error("Recurring plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Walk not found for the given ID
    #[error("Walk with ID {id} not found")]
    WalkNotFound { id: u64 },
    /// Payment card not found for the given ID
    #[error("Payment card with ID {id} not found")]
    CardNotFound { id: u64 },
    /// Occurrences can only be confirmed for active plans
    #[error("Recurring plan {id} is paused")]
    PlanInactive { id: u64 },
    /// A form or wizard step was submitted with incomplete input
    #[error("{0}")]
    Validation(#[from] ValidationFailure),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// User-facing validation messages.
///
/// These are shown to the user as-is and never abort the application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Select at least one day of the week.")]
    NoDaysSelected,
    #[error("Select at least one dog.")]
    NoDogsSelected,
    #[error("Choose a preferred walker.")]
    NoWalkerSelected,
    #[error("Add a pickup address so your walker knows where to go.")]
    MissingAddress,
    #[error("Pick a date and time for the walk.")]
    MissingDateTime,
    #[error("Walks can't be booked before {min_date}.")]
    DateBeforeMinimum { min_date: jiff::civil::Date },
    #[error("Review the booking before confirming.")]
    NotAtReview,
    #[error("{0}")]
    Card(&'static str),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WalkiesError {
        WalkiesError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WalkiesError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error is a user-facing validation message rather than a
    /// lookup or parsing failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, WalkiesError::Validation(_))
    }
}

/// Result type alias for walkies operations
pub type Result<T> = std::result::Result<T, WalkiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WalkiesError::invalid_input("dogs").with_reason("duplicate id 1");
        assert_eq!(err.to_string(), "Invalid input for field 'dogs': duplicate id 1");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_messages_are_user_facing() {
        let err: WalkiesError = ValidationFailure::NoDaysSelected.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Select at least one day of the week.");
    }
}
