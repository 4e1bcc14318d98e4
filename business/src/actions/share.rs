//! Share action with capability detection.
//!
//! Platforms that expose a native share sheet get [`Sharer::NativeShare`];
//! everything else uses [`Sharer::ClipboardFallback`], which behaves exactly
//! like the copy action. The variant is chosen once, when the action starts.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use qrgen_clipboard::ClipboardProvider;

use super::{ActionReport, ActionResult, copy_qr_url};
use crate::error::{ActionError, ActionKind};

/// What gets handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_qr_code(payload: &str, url: &str) -> Self {
        Self {
            title: "QR Code".to_owned(),
            text: format!("QR Code for: {payload}"),
            url: url.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The user closed the sheet. Not an error from the user's point of view.
    #[error("share sheet dismissed")]
    Cancelled,
    #[error("share failed: {0}")]
    Failed(String),
}

/// A platform share sheet.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, payload: SharePayload) -> Result<(), ShareError>;
}

#[derive(Clone)]
pub enum Sharer {
    NativeShare(Arc<dyn ShareSheet>),
    ClipboardFallback,
}

impl fmt::Debug for Sharer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeShare(_) => f.write_str("NativeShare"),
            Self::ClipboardFallback => f.write_str("ClipboardFallback"),
        }
    }
}

impl Sharer {
    pub fn is_native(&self) -> bool {
        matches!(self, Self::NativeShare(_))
    }
}

/// Shares the captured URL, falling back to the clipboard without a share sheet.
pub async fn share_qr_code(
    url: &str,
    payload: &str,
    sharer: &Sharer,
    clipboard: &dyn ClipboardProvider,
) -> ActionResult {
    if url.is_empty() {
        return Err(ActionError::EmptyInput);
    }

    match sharer {
        Sharer::NativeShare(sheet) => {
            match sheet.share(SharePayload::for_qr_code(payload, url)).await {
                Ok(()) => {
                    info!("QR code shared");
                    Ok(ActionReport::Shared)
                }
                Err(ShareError::Cancelled) => {
                    info!("Share sheet dismissed by user");
                    Ok(ActionReport::ShareDismissed)
                }
                Err(err) => {
                    warn!("Sharing QR code failed: {err}");
                    Err(ActionError::failed(ActionKind::Share, err))
                }
            }
        }
        Sharer::ClipboardFallback => copy_qr_url(url, clipboard).await,
    }
}
