//! Notification sink for the terminal.

use std::io::Write;

use barn_tracker::{Notification, NotificationSink, Severity};

/// Prints notifications as they arrive: info to stdout, errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, n: Notification) {
        let line = format_notification(&n);
        // Write errors are ignored.
        let _ = match n.severity {
            Severity::Info => writeln!(std::io::stdout(), "{line}"),
            Severity::Error => writeln!(std::io::stderr(), "{line}"),
        };
    }
}

/// `"[info] Harvest Updated! Added 5 tons to Tomato"`.
pub fn format_notification(n: &Notification) -> String {
    format!("[{}] {} {}", n.severity, n.title, n.description)
}
