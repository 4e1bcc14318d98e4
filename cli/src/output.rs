//! Styled terminal output.
//!
//! Action results are printed the way the UI shows its toasts: a title and a
//! description, marked green or red.

use std::fmt::Display;

use console::{Term, style};
use qrgen_business::{Notification, NotificationKind};

pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Output writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Output writing to stderr, for messages that must not mix with piped results.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    pub fn info(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("ℹ").blue().bold(), message)),
        );
    }

    /// Plain line, no prefix. Used for machine-readable results like the URL.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn notification(&self, notification: &Notification) {
        let line = notification_line(notification);
        match notification.kind {
            NotificationKind::Success => self.success(line),
            NotificationKind::Error => self.error(line),
        }
    }
}

fn notification_line(notification: &Notification) -> String {
    format!(
        "{} {}",
        style(notification.title).bold(),
        notification.description
    )
}
