use thiserror::Error;

/// Field a validation rule was violated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Priority,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Priority => "priority",
        }
    }
}

/// A single violated validation rule.
#[derive(Debug, Clone)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

/// Domain errors raised by the task store. The store never raises
/// anything else; the REST layer maps these to status codes.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with ID {0} not found")]
    NotFound(String),

    /// One or more field rules violated by a single call. All violations
    /// are collected before failing, not just the first.
    #[error("{}", .violations.iter().map(|v| v.message.as_str()).collect::<Vec<_>>().join(". "))]
    Validation { violations: Vec<Violation> },
}

impl TaskError {
    /// Stable machine-readable code for the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            TaskError::NotFound(_) => "TASK_NOT_FOUND",
            TaskError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}
