use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    message : String,
    kind    : NotificationKind,
    created : Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Error)
    }

    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            created: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created) >= timeout
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Success => write!(f, "[OK] {}", self.message),
            NotificationKind::Error => write!(f, "[ERROR] {}", self.message),
        }
    }
}
