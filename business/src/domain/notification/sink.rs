use super::model::Notification;

/// Where user-facing notifications end up (a toast area, a terminal line, ...).
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
