//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by the list
//! controller: the remote task collection and user notifications.

pub mod notifier;
pub mod repository;

pub use notifier::{Notification, NotificationLevel, Notifier};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
