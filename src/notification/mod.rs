//! Notification system
//! Transient messages overlaid on the widget (transport failures, job errors)

use std::time::{Duration, Instant};

/// Types of notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier
    pub id: u64,
    /// The message content
    pub message: String,
    /// The type/severity of the notification
    pub kind: NotificationType,
    /// When the notification was created
    pub timestamp: Instant,
    /// Time-to-live before it is pruned
    pub ttl: Duration,
}

impl Notification {
    /// Check if the notification has expired
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.timestamp) > self.ttl
    }
}

/// Manages active notifications
pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a notification with an explicit TTL
    pub fn add(&mut self, kind: NotificationType, message: impl Into<String>, ttl: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            kind,
            timestamp: Instant::now(),
            ttl,
        });
        id
    }

    /// Add an info notification (convenience)
    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Info, message, Duration::from_secs(5))
    }

    /// Add a warning notification (convenience)
    pub fn warn(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Warning, message, Duration::from_secs(8))
    }

    /// Add an error notification (convenience)
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Error, message, Duration::from_secs(10))
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Iterate over active notifications
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }

    /// Prune expired notifications; returns whether anything changed
    pub fn prune_expired(&mut self) -> bool {
        let now = Instant::now();
        let old_len = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired(now));
        self.notifications.len() != old_len
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
