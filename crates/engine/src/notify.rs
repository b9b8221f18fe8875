//! User-facing notifications, decoupled from any UI toolkit.
//!
//! The controller emits these fire-and-forget; the presentation shell
//! decides how to render them (toast, status line, stderr).

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Where notifications go. No return value, no ordering guarantee
/// relative to other state changes.
pub trait NotificationSink {
    fn notify(&mut self, note: Notification);
}

/// Plain buffer sink; what tests and headless shells use.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, note: Notification) {
        self.push(note);
    }
}
