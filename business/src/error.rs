use std::fmt;

use thiserror::Error;

/// The three user-triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Download,
    Copy,
    Share,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Download => "download",
            Self::Copy => "copy",
            Self::Share => "share",
        })
    }
}

/// Why an action did not complete.
///
/// `EmptyInput` is silent: the action is simply not performed.
/// `Failed` is terminal for the attempt and surfaces as a generic error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("nothing to generate: payload is empty")]
    EmptyInput,
    #[error("{action} failed: {reason}")]
    Failed { action: ActionKind, reason: String },
}

impl ActionError {
    pub fn failed(action: ActionKind, reason: impl fmt::Display) -> Self {
        Self::Failed {
            action,
            reason: reason.to_string(),
        }
    }
}
