//! Transient user notifications: the only channel actions report through.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived message shown as a toast (UI) or a status line (CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub const fn success(title: &'static str, description: &'static str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title,
            description,
        }
    }

    pub const fn error(description: &'static str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error",
            description,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.description)
    }
}

pub const DOWNLOADED: Notification =
    Notification::success("Success!", "QR code downloaded successfully.");
pub const DOWNLOAD_FAILED: Notification = Notification::error("Failed to download QR code.");
pub const COPIED: Notification = Notification::success("Copied!", "QR code URL copied to clipboard.");
pub const COPY_FAILED: Notification = Notification::error("Failed to copy URL.");
pub const SHARE_FAILED: Notification = Notification::error("Failed to share QR code.");
