//! Status and notice messages for operation feedback.

use std::fmt;

use crate::error::WalkiesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// Something the user needs to fix; shown like a toast
    Notice,
    Error,
}

/// Wrapper type for one-line operation feedback.
#[derive(Debug, Clone)]
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Notice,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

impl From<&WalkiesError> for OperationStatus {
    /// Validation failures become notices; everything else is an error.
    fn from(error: &WalkiesError) -> Self {
        if error.is_validation() {
            Self::notice(error.to_string())
        } else {
            Self::failure(error.to_string())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Notice:",
            StatusKind::Error => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Walk booked");
        assert_eq!(success.to_string(), "Success: Walk booked\n");

        let failure = OperationStatus::failure("Operation failed");
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_validation_errors_become_notices() {
        let err = WalkiesError::from(ValidationFailure::NoDogsSelected);
        let status = OperationStatus::from(&err);
        assert_eq!(status.kind, StatusKind::Notice);
        assert_eq!(status.to_string(), "Notice: Select at least one dog.\n");

        let status = OperationStatus::from(&WalkiesError::DogNotFound { id: 4 });
        assert_eq!(status.kind, StatusKind::Error);
    }
}
