//! Repository port for the remote task collection.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch, TaskQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Remote task collection contract.
///
/// Each operation maps to one request against the service. Nothing is
/// retried; a retry is the caller repeating the action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists tasks, optionally filtered and ordered by the service.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Network`] when the service answers
    /// with a non-success status.
    async fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Network`] when the service answers
    /// with a non-success status, including an unknown id.
    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Creates a task; the service assigns its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the service rejects
    /// the draft, or [`TaskRepositoryError::Network`] for other failures.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Applies a partial update and returns the merged task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the service rejects
    /// the patch, or [`TaskRepositoryError::Network`] for other failures.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Network`] when the service answers
    /// with a non-success status.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
///
/// The display form of every variant is a message fit to show a user.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Network {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or a generic status message.
        message: String,
    },

    /// The service rejected a create or update payload.
    #[error("{message}")]
    Validation {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or a generic status message.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Builds a [`TaskRepositoryError::Network`] error, falling back to the
    /// generic status message when `message` is absent or blank.
    #[must_use]
    pub fn network(status: u16, message: Option<String>) -> Self {
        Self::Network {
            status,
            message: message_or_generic(status, message),
        }
    }

    /// Builds a [`TaskRepositoryError::Validation`] error, falling back to
    /// the generic status message when `message` is absent or blank.
    #[must_use]
    pub fn validation(status: u16, message: Option<String>) -> Self {
        Self::Validation {
            status,
            message: message_or_generic(status, message),
        }
    }

    /// Wraps a transport-level failure.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the HTTP status code, when the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } | Self::Validation { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Returns the generic message used when the body carries none.
    #[must_use]
    pub fn generic_message(status: u16) -> String {
        format!("HTTP error! status: {status}")
    }
}

fn message_or_generic(status: u16, message: Option<String>) -> String {
    message
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| TaskRepositoryError::generic_message(status))
}
