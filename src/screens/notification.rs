//! Transient notifications (snackbars)

use super::navigation::Destination;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    pub label: String,
    pub destination: Destination,
}

/// A dismissible message, optionally with a single action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub action: Option<NotificationAction>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, destination: Destination) -> Self {
        self.action = Some(NotificationAction {
            label: label.into(),
            destination,
        });
        self
    }
}

/// Fire-and-forget sink for notifications
pub trait Notifier: Send + Sync {
    fn show(&self, notification: Notification);
}
