//! Core of qrgen: the generation request, the URL builder and the actions
//! that run against the remote QR image service.
//!
//! Nothing in here renders anything. The UI and CLI crates own presentation
//! and plug platform capabilities (clipboard, download sink, share sheet) into
//! the actions.

mod actions;
mod config;
mod error;
pub mod http;
mod notification;
mod request;
mod url_builder;

pub use actions::{
    ActionOutcome, ActionReport, ActionResult, DownloadError, DownloadSink, SavedFile, ShareError,
    SharePayload, ShareSheet, Sharer, copy_qr_url, download_file_name, download_qr_code,
    share_qr_code,
};
#[cfg(not(target_arch = "wasm32"))]
pub use actions::DirectorySink;
pub use config::BusinessConfig;
pub use error::{ActionError, ActionKind};
pub use notification::{Notification, NotificationKind};
pub use request::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, ErrorCorrection, GenerationRequest,
    ParseErrorCorrectionError, QrSize,
};
pub use url_builder::{QR_SERVER_ENDPOINT, UrlBuilder};

/// Notifications emitted by the actions.
pub mod notifications {
    pub use crate::notification::{COPIED, COPY_FAILED, DOWNLOAD_FAILED, DOWNLOADED, SHARE_FAILED};
}
