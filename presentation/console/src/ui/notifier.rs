use business::domain::notification::model::{Notification, NotificationLevel};
use business::domain::notification::sink::NotificationSink;

/// Prints notifications as single lines on stdout, like a toast area.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{}", format_notification(&notification));
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Info => "i",
        NotificationLevel::Success => "✓",
        NotificationLevel::Error => "✗",
    };
    let time = notification.at.format("%H:%M:%S");
    match &notification.detail {
        Some(detail) => format!("[{}] {} {} ({})", time, marker, notification.message, detail),
        None => format!("[{}] {} {}", time, marker, notification.message),
    }
}
