//! Error types for task domain parsing.

use thiserror::Error;

/// Errors returned while parsing task domain values from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The status value is not one of the supported task statuses.
    #[error("unknown task status '{0}', expected pending, in-progress or completed")]
    UnknownStatus(String),

    /// The status filter value is not `all` or a task status.
    #[error("unknown status filter '{0}', expected all, pending, in-progress or completed")]
    UnknownStatusFilter(String),

    /// The sort key is not supported.
    #[error("unknown sort key '{0}', expected created_at, due_date or title")]
    UnknownSortKey(String),

    /// The task identifier is not an integer.
    #[error("invalid task id '{0}', expected an integer")]
    InvalidTaskId(String),

    /// The value is not a calendar date.
    #[error("invalid calendar date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
