//! Transient toast notifications.

/// Number of UI ticks a notification stays on screen.
///
pub const NOTIFICATION_TICKS: u16 = 50;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationKind {
    Success,
    Info,
    Warn,
    Error,
}

/// A toast that dismisses itself after [`NOTIFICATION_TICKS`] ticks.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    ticks_remaining: u16,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            kind,
            message: message.into(),
            ticks_remaining: NOTIFICATION_TICKS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Error, message)
    }

    /// Count down one tick. Returns `false` once expired.
    ///
    pub fn tick(&mut self) -> bool {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        self.ticks_remaining > 0
    }
}
