use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message produced by a store or a use case.
///
/// `detail` carries the underlying error for diagnostics and is only set on
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub detail: Option<String>,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message.into(), None)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message.into(), None)
    }

    pub fn error(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::new(
            NotificationLevel::Error,
            message.into(),
            Some(detail.to_string()),
        )
    }

    fn new(level: NotificationLevel, message: String, detail: Option<String>) -> Self {
        Self {
            level,
            message,
            detail,
            at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
