//! Notifier that emits notifications as `tracing` events.

use crate::task::ports::{Notification, NotificationLevel, Notifier};

/// Routes notifications to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level() {
            NotificationLevel::Success => tracing::info!(
                title = notification.title(),
                "{}",
                notification.description()
            ),
            NotificationLevel::Error => tracing::warn!(
                title = notification.title(),
                "{}",
                notification.description()
            ),
        }
    }
}
