//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the schema-backed maximum length.
    #[error("task title length {0} exceeds the 200-character maximum")]
    TitleTooLong(usize),

    /// The task description exceeds the schema-backed maximum length.
    #[error("task description length {0} exceeds the 1000-character maximum")]
    DescriptionTooLong(usize),
}

/// Error returned while parsing task statuses from persistence or the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
