//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is shorter than the required minimum.
    #[error("task title '{title}' is too short, expected at least {minimum} characters")]
    TitleTooShort {
        /// The rejected title value.
        title: String,
        /// Minimum number of characters a title must carry.
        minimum: usize,
    },
}

/// Error returned while parsing task priorities from wire or storage values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
