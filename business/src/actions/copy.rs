use log::{info, warn};
use qrgen_clipboard::ClipboardProvider;

use super::{ActionReport, ActionResult};
use crate::error::{ActionError, ActionKind};

/// Writes the captured QR image URL to the clipboard.
///
/// Resolves only after the clipboard accepted or refused the write, so a
/// refusal is reported instead of a false "Copied!".
pub async fn copy_qr_url(url: &str, clipboard: &dyn ClipboardProvider) -> ActionResult {
    if url.is_empty() {
        return Err(ActionError::EmptyInput);
    }

    match clipboard.set_text(url).await {
        Ok(()) => {
            info!("Copied QR code URL to clipboard ({} bytes)", url.len());
            Ok(ActionReport::Copied)
        }
        Err(err) => {
            warn!("Failed to copy QR code URL: {err}");
            Err(ActionError::failed(ActionKind::Copy, err))
        }
    }
}
