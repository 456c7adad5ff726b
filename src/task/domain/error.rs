//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or updating domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is not one of the enumerated priorities.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),

    /// The status value is not one of the enumerated statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The estimated effort is zero, negative, or not finite.
    #[error("invalid estimated hours {0}, expected a positive finite value")]
    InvalidEstimatedHours(f64),

    /// The recorded effort is negative or not finite.
    #[error("invalid actual hours {0}, expected a non-negative finite value")]
    InvalidActualHours(f64),

    /// A tag is empty after trimming.
    #[error("tags must not be empty")]
    EmptyTag,

    /// A tag exceeds the persisted label length.
    #[error("tag '{tag}' exceeds the maximum length of {max_len} characters")]
    TagTooLong {
        /// The offending tag value.
        tag: String,
        /// The maximum accepted length.
        max_len: usize,
    },

    /// The patch does not set any field.
    #[error("no fields to update")]
    EmptyPatch,
}

/// Error returned while parsing task statuses from raw input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from raw input or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
