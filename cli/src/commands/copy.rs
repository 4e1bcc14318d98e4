use qrgen_business::{ActionKind, ActionOutcome, BusinessConfig, GenerationRequest, copy_qr_url};
use qrgen_clipboard::ClipboardProvider;
use tracing::instrument;

/// Copies the QR image URL to `clipboard`.
///
/// Returns once the clipboard settled the write, which may include the hold
/// of a [`qrgen_clipboard::SystemClipboard::holding`] clipboard.
#[instrument(skip_all, name = "copy")]
pub async fn run_copy(
    config: &BusinessConfig,
    request: &GenerationRequest,
    clipboard: &dyn ClipboardProvider,
) -> ActionOutcome {
    let url = config.url_builder().build(request);
    ActionOutcome::new(ActionKind::Copy, copy_qr_url(&url, clipboard).await)
}
