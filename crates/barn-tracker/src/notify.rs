//! # Notifications
//!
//! The tracker reports outcomes as `(title, description, severity)` values
//! pushed into a [`NotificationSink`]. Sinks are fire-and-forget: nothing
//! is returned and display order equals call order.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use barn_core::Timestamp;

/// How a notification is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral or success feedback.
    Info,
    /// Something the user did was rejected, or a collaborator failed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Presentation severity.
    pub severity: Severity,
    /// When it was raised.
    pub issued_at: Timestamp,
}

impl Notification {
    /// An info notification stamped now.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Info)
    }

    /// An error notification stamped now.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Error)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            issued_at: Timestamp::now(),
        }
    }
}

/// Destination for notifications (toast area, terminal, test recorder).
pub trait NotificationSink: Send + Sync {
    /// Display `notification`. Must not block.
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Records notifications in memory, in call order.
#[derive(Debug, Default)]
pub struct MemorySink {
    received: Mutex<Vec<Notification>>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.received.lock())
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.received.lock().len()
    }

    /// Whether nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.received.lock().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, n: Notification) {
        match n.severity {
            Severity::Info => tracing::info!(title = %n.title, "{}", n.description),
            Severity::Error => tracing::error!(title = %n.title, "{}", n.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_call_order() {
        let sink = MemorySink::new();
        sink.notify(Notification::info("a", "first"));
        sink.notify(Notification::error("b", "second"));
        let got = sink.snapshot();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].description, "first");
        assert_eq!(got[1].severity, Severity::Error);
    }

    #[test]
    fn test_drain_empties_sink() {
        let sink = MemorySink::new();
        sink.notify(Notification::info("a", "b"));
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_arc_sink_forwards() {
        let inner = Arc::new(MemorySink::new());
        let shared: Arc<dyn NotificationSink> = inner.clone();
        shared.notify(Notification::info("t", "d"));
        assert_eq!(inner.len(), 1);
    }
}
