//! Clipboard text access for qrgen UI and CLI.
//!
//! This crate provides a common interface for writing text (the generated QR
//! image URL) to the system clipboard, usable by both the egui/eframe app and
//! the CLI.
//!
//! # Architecture
//!
//! The crate uses a trait-based design for testability:
//! - [`ClipboardProvider`]: Generic interface for clipboard access
//! - [`SystemClipboard`]: Production implementation (arboard on native, `navigator.clipboard` on web)
//! - [`MemoryClipboard`]: In-process implementation that records writes, used by tests
//!
//! # Platform Support
//!
//! - **Windows / macOS / Linux (X11, Wayland)**: arboard
//! - **Web (WASM)**: Async Clipboard API. The write resolves only once the
//!   browser accepts it, so a rejected permission surfaces as an error.
//!
//! On X11 and Wayland the clipboard contents are served by the process that
//! wrote them. A short-lived process (the CLI) should use
//! [`SystemClipboard::holding`] so the text can still be pasted after it
//! exits; a clipboard manager taking over ends the hold early.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use qrgen_clipboard::{ClipboardProvider, SystemClipboard};
//!
//! # async fn run() {
//! let clipboard = SystemClipboard::holding(Duration::from_secs(10));
//! match clipboard.set_text("https://api.qrserver.com/v1/create-qr-code/?data=hi").await {
//!     Ok(()) => println!("copied"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

/// Error types for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to access the clipboard (no display server, permission denied...).
    #[error("Clipboard access error: {0}")]
    AccessError(String),
    /// The clipboard was reachable but rejected the write.
    #[error("Clipboard write error: {0}")]
    WriteError(String),
}

/// Trait for clipboard text access, enabling mock implementations for testing.
///
/// Implementations must be shareable across threads because actions run on
/// spawned tasks.
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// Resolves once the platform has accepted (or refused) the write.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// Clipboard for long-lived processes such as the UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that keeps serving the written text for up to `hold` on X11 and
    /// Wayland, or until another program replaces it.
    ///
    /// Has no effect on platforms where the OS keeps the contents itself.
    pub fn holding(hold: Duration) -> Self {
        Self { hold: Some(hold) }
    }

    /// Whether writes on this platform block while the contents are held.
    pub const fn holds_selection() -> bool {
        cfg!(all(
            unix,
            not(any(
                target_os = "macos",
                target_os = "android",
                target_os = "emscripten"
            ))
        ))
    }

    /// How long writes are held, if at all.
    pub fn hold(&self) -> Option<Duration> {
        self.hold.filter(|_| Self::holds_selection())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl ClipboardProvider for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;

        write_native(&mut clipboard, text, self.hold())
            .map_err(|e| ClipboardError::WriteError(e.to_string()))?;

        log::debug!(
            target: "qrgen_clipboard",
            "clipboard_text_written bytes={} held={:?}",
            text.len(),
            self.hold()
        );
        Ok(())
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write_native(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux as _;

    match hold {
        Some(hold) => clipboard
            .set()
            .wait_until(std::time::Instant::now() + hold)
            .text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(all(
    not(target_arch = "wasm32"),
    not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))
))]
fn write_native(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg(target_arch = "wasm32")]
#[async_trait]
impl ClipboardProvider for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        // JS futures are not Send; await the promise on the local executor and
        // hand the result back over a channel.
        let (tx, rx) = flume::bounded::<Result<(), ClipboardError>>(1);
        let text = text.to_owned();

        wasm_bindgen_futures::spawn_local(async move {
            let result = write_text_web(&text).await;
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_| ClipboardError::WriteError("clipboard task dropped".to_owned()))?
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_text_web(text: &str) -> Result<(), ClipboardError> {
    let window =
        web_sys::window().ok_or_else(|| ClipboardError::AccessError("no window".to_owned()))?;
    let promise = window.navigator().clipboard().write_text(text);

    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => Ok(()),
        Err(err) => {
            log::warn!("Clipboard write rejected by browser: {err:?}");
            Err(ClipboardError::WriteError(
                err.as_string().unwrap_or_else(|| format!("{err:?}")),
            ))
        }
    }
}

/// Clipboard that keeps its contents in memory.
///
/// Used in tests and as a stand-in when no system clipboard exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_text` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or_default()
    }

    /// Current contents, if anything was written.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl ClipboardProvider for MemoryClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        *contents = Some(text.to_owned());
        drop(contents);

        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}
