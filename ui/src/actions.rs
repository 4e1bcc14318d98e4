//! Starts the download / copy / share actions from the UI.
//!
//! The URL is captured when the button is clicked. Every action runs as a
//! background task, since even the clipboard write only settles later in the
//! browser. The outcome goes through the state's channel and becomes a toast
//! on a later frame.

use qrgen_business::{ActionKind, ActionOutcome, copy_qr_url, download_qr_code, share_qr_code};

use crate::state::State;
use crate::utils::spawn::spawn;

pub fn run_action(state: &State, kind: ActionKind, ctx: &egui::Context) {
    let url = state.qr_url();
    let sender = state.outcome_sender();
    let ctx = ctx.clone();
    log::info!("{kind} requested");

    let report = move |outcome: ActionOutcome| {
        // The UI may already be gone; nothing left to notify then.
        drop(sender.send(outcome));
        ctx.request_repaint();
    };

    match kind {
        ActionKind::Copy => {
            let clipboard = state.capabilities.clipboard.clone();
            spawn(async move {
                let result = copy_qr_url(&url, clipboard.as_ref()).await;
                report(ActionOutcome::new(kind, result));
            });
        }
        ActionKind::Download => {
            let sink = state.capabilities.download_sink.clone();
            spawn(async move {
                let result = download_qr_code(&url, sink.as_ref()).await;
                report(ActionOutcome::new(kind, result));
            });
        }
        ActionKind::Share => {
            let payload = state.form.payload.clone();
            let sharer = state.capabilities.sharer.clone();
            let clipboard = state.capabilities.clipboard.clone();
            spawn(async move {
                let result = share_qr_code(&url, &payload, &sharer, clipboard.as_ref()).await;
                report(ActionOutcome::new(kind, result));
            });
        }
    }
}
