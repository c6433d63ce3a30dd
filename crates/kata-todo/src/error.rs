//! Error types for the todo list manager

use crate::types::TodoId;

/// Todo list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Text was empty or whitespace only
    #[error("invalid input: todo text must not be empty")]
    InvalidInput,

    /// Text longer than the configured limit
    #[error("todo text is {len} characters, limit is {max}")]
    TextTooLong {
        /// Length of the rejected text, in characters
        len: usize,
        /// Configured limit
        max: usize,
    },

    /// No record with this id
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Category is not a single word
    #[error("invalid category '{0}': must be a single word without '@'")]
    InvalidCategory(String),

    /// Filter name not recognised
    #[error("unknown filter '{0}' (expected all, active, or completed)")]
    UnknownFilter(String),

    /// Priority name not recognised
    #[error("unknown priority '{0}' (expected low, normal, or high)")]
    UnknownPriority(String),
}

/// Result type alias for todo operations
pub type TodoResult<T> = Result<T, TodoError>;
