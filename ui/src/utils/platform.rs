//! Platform capabilities plugged into the actions.

use std::sync::Arc;

use bon::Builder;
use qrgen_business::{BusinessConfig, DownloadSink, Sharer};
use qrgen_clipboard::{ClipboardProvider, SystemClipboard};

/// Everything an action needs from the host platform.
#[derive(Clone, Builder)]
pub struct Capabilities {
    pub clipboard: Arc<dyn ClipboardProvider>,
    pub download_sink: Arc<dyn DownloadSink>,
    #[builder(default = Sharer::ClipboardFallback)]
    pub sharer: Sharer,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("sharer", &self.sharer)
            .finish_non_exhaustive()
    }
}

impl Capabilities {
    /// The real clipboard, download location and share sheet of this platform.
    pub fn platform(config: &BusinessConfig) -> Self {
        Self::builder()
            .clipboard(Arc::new(SystemClipboard::new()))
            .download_sink(platform_download_sink(config))
            .sharer(detect_sharer())
            .build()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_download_sink(config: &BusinessConfig) -> Arc<dyn DownloadSink> {
    log::info!("Saving downloads to {}", config.download_dir.display());
    Arc::new(qrgen_business::DirectorySink::new(config.download_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
fn platform_download_sink(_config: &BusinessConfig) -> Arc<dyn DownloadSink> {
    Arc::new(super::web::AnchorDownloadSink)
}

/// Picks the native share sheet when the platform has one.
///
/// Desktop builds have no share sheet and always share through the clipboard.
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_sharer() -> Sharer {
    Sharer::ClipboardFallback
}

#[cfg(target_arch = "wasm32")]
pub fn detect_sharer() -> Sharer {
    if super::web::share_supported() {
        Sharer::NativeShare(Arc::new(super::web::WebShareSheet))
    } else {
        log::info!("navigator.share unavailable, sharing falls back to the clipboard");
        Sharer::ClipboardFallback
    }
}
