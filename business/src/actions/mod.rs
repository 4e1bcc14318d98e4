//! The user-triggered actions built on top of the URL builder.
//!
//! Every action takes the URL captured when the user clicked, never the live
//! form state, so edits made while an action is in flight do not affect it.
//! Each attempt runs once and ends in an [`ActionOutcome`]; there is no retry,
//! queueing or cancellation.

mod copy;
mod download;
mod share;

pub use copy::copy_qr_url;
#[cfg(not(target_arch = "wasm32"))]
pub use download::DirectorySink;
pub use download::{DownloadError, DownloadSink, SavedFile, download_file_name, download_qr_code};
pub use share::{ShareError, SharePayload, ShareSheet, Sharer, share_qr_code};

use crate::error::{ActionError, ActionKind};
use crate::notification::{self, Notification};

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReport {
    Downloaded(SavedFile),
    Copied,
    Shared,
    /// The user closed the share sheet without picking a target.
    ShareDismissed,
}

pub type ActionResult = Result<ActionReport, ActionError>;

/// The settled result of one action attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub result: ActionResult,
}

impl ActionOutcome {
    pub fn new(kind: ActionKind, result: ActionResult) -> Self {
        Self { kind, result }
    }

    /// The toast to show for this outcome, if any.
    ///
    /// Empty input, a completed native share and a dismissed share sheet are silent.
    pub fn notification(&self) -> Option<Notification> {
        match &self.result {
            Ok(ActionReport::Downloaded(_)) => Some(notification::DOWNLOADED),
            Ok(ActionReport::Copied) => Some(notification::COPIED),
            Ok(ActionReport::Shared | ActionReport::ShareDismissed) => None,
            Err(ActionError::EmptyInput) => None,
            // Report against the step that failed: a share that fell back to
            // the clipboard fails as a copy.
            Err(ActionError::Failed { action, .. }) => Some(match action {
                ActionKind::Download => notification::DOWNLOAD_FAILED,
                ActionKind::Copy => notification::COPY_FAILED,
                ActionKind::Share => notification::SHARE_FAILED,
            }),
        }
    }
}
