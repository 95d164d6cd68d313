//! Notification port for transient user messages.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    /// An action completed.
    Success,
    /// An action failed; local state was left as it was.
    Error,
}

/// A short message reporting the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    level: NotificationLevel,
    title: String,
    description: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates an error notification titled `Error`.
    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_owned(),
            description: description.into(),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Delivers a notification. Delivery never fails from the caller's view.
    fn notify(&self, notification: Notification);
}
