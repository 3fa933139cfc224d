//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
///
/// Every variant is caused by caller input violating an entity invariant
/// and is recoverable by supplying corrected input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be blank")]
    BlankName,

    /// The task name exceeds the maximum length.
    #[error("task name must not exceed {max} characters, got {length}")]
    NameTooLong {
        /// Number of characters in the rejected name.
        length: usize,
        /// Maximum permitted name length.
        max: usize,
    },

    /// The replacement description is empty after trimming.
    #[error("task description must not be blank")]
    BlankDescription,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
