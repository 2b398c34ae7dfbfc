use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::form::FormKind;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Font Awesome icon class shown next to the message
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Warning => "fas fa-exclamation-triangle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// Toast message shown to the visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    pub fn with_duration_ms(mut self, millis: u64) -> Self {
        self.duration = Duration::from_millis(millis);
        self
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn connection_restored() -> Self {
        Self::success("Connection restored").with_duration_ms(3000)
    }

    pub fn offline() -> Self {
        Self::warning("You are currently offline").with_duration_ms(10_000)
    }

    /// Shown when an uncaught script error reaches the page
    pub fn unexpected_error() -> Self {
        Self::error("An unexpected error occurred. Please refresh the page.")
    }

    pub fn form_submitted(form: FormKind) -> Self {
        Self::success(form.success_message())
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
