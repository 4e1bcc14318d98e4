use flume::{Receiver, Sender};
use qrgen_business::{ActionOutcome, BusinessConfig, GenerationRequest};

use crate::utils::platform::Capabilities;
use crate::widgets::Toasts;

/// The main application state.
///
/// The form is the only user-editable data; the QR URL is derived from it on
/// every frame and never stored.
pub struct State {
    /// Current form values.
    pub form: GenerationRequest,
    pub config: BusinessConfig,
    pub capabilities: Capabilities,
    pub toasts: Toasts,
    /// URL of the image currently in the preview; empty when showing the placeholder.
    preview_url: String,
    /// Finished actions report back through this channel.
    outcome_sender: Sender<ActionOutcome>,
    outcome_receiver: Receiver<ActionOutcome>,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env();
        let capabilities = Capabilities::platform(&config);
        Self::new(config, capabilities)
    }
}

impl State {
    pub fn new(config: BusinessConfig, capabilities: Capabilities) -> Self {
        let (outcome_sender, outcome_receiver) = flume::unbounded();

        Self {
            form: GenerationRequest::default(),
            config,
            capabilities,
            toasts: Toasts::default(),
            preview_url: String::new(),
            outcome_sender,
            outcome_receiver,
        }
    }

    /// State pointing at a mock QR service, with in-memory clipboard and no share sheet.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn test(base_url: String) -> Self {
        use std::sync::Arc;

        let config = BusinessConfig::new(base_url);
        let capabilities = Capabilities::builder()
            .clipboard(Arc::new(qrgen_clipboard::MemoryClipboard::new()))
            .download_sink(Arc::new(qrgen_business::DirectorySink::new(
                config.download_dir.clone(),
            )))
            .build();

        Self::new(config, capabilities)
    }

    /// The image URL for the current form values; empty when there is nothing to encode.
    pub fn qr_url(&self) -> String {
        self.config.url_builder().build(&self.form)
    }

    /// Records `url` as the previewed image. Returns the previous URL when it
    /// changed, so its cached image can be released.
    pub fn replace_preview_url(&mut self, url: &str) -> Option<String> {
        if self.preview_url == url {
            return None;
        }
        let previous = std::mem::replace(&mut self.preview_url, url.to_owned());
        (!previous.is_empty()).then_some(previous)
    }

    pub fn outcome_sender(&self) -> Sender<ActionOutcome> {
        self.outcome_sender.clone()
    }

    /// Turns every finished action into a toast. Returns how many were drained.
    pub fn sync_outcomes(&mut self, now: f64) -> usize {
        let mut drained = 0;
        for outcome in self.outcome_receiver.try_iter() {
            drained += 1;
            match &outcome.result {
                Ok(report) => log::debug!("{} finished: {report:?}", outcome.kind),
                Err(err) => log::debug!("{} finished with error: {err}", outcome.kind),
            }
            if let Some(notification) = outcome.notification() {
                self.toasts.push(notification, now);
            }
        }
        drained
    }
}
