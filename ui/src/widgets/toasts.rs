//! Transient notifications in the bottom-right corner.

use egui::{Align2, Color32, Frame, Margin, RichText, Stroke, Ui};
use qrgen_business::{Notification, NotificationKind};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Seconds a toast stays on screen.
pub const TOAST_DURATION: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notification: Notification,
    /// `egui` input time when the toast was pushed.
    pub shown_at: f64,
}

impl Toast {
    fn expired(&self, now: f64) -> bool {
        now - self.shown_at >= TOAST_DURATION
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    active: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification, now: f64) {
        self.active.push(Toast {
            notification,
            shown_at: now,
        });
    }

    /// Drops toasts that have been shown long enough.
    pub fn retain_active(&mut self, now: f64) {
        self.active.retain(|toast| !toast.expired(now));
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.active.len() {
            self.active.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Renders the active toasts; clicking one dismisses it.
pub fn toasts(toasts: &mut Toasts, ctx: &egui::Context) {
    let now = ctx.input(|i| i.time);
    toasts.retain_active(now);
    if toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (index, toast) in toasts.iter().enumerate() {
                if toast_card(&toast.notification, ui).clicked() {
                    dismissed = Some(index);
                }
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        toasts.dismiss(index);
    }

    // Wake up again to expire the oldest toast.
    if let Some(oldest) = toasts.iter().map(|t| t.shown_at).reduce(f64::min) {
        let remaining = (oldest + TOAST_DURATION - now).max(0.0);
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
    }
}

fn toast_card(notification: &Notification, ui: &mut Ui) -> egui::Response {
    let accent = match notification.kind {
        NotificationKind::Success => COLOR_GREEN,
        NotificationKind::Error => COLOR_RED,
    };

    Frame::NONE
        .fill(ui.visuals().window_fill)
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_min_width(220.0);
            ui.label(RichText::new(notification.title).strong().color(accent));
            ui.label(RichText::new(notification.description).color(Color32::GRAY));
        })
        .response
        .interact(egui::Sense::click())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrgen_business::notifications;

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut toasts = Toasts::default();
        toasts.push(notifications::COPIED, 1.0);
        toasts.push(notifications::COPY_FAILED, 2.5);

        toasts.retain_active(3.9);
        assert_eq!(toasts.len(), 2);

        toasts.retain_active(4.0);
        let left: Vec<_> = toasts.iter().map(|t| t.notification.clone()).collect();
        assert_eq!(left, vec![notifications::COPY_FAILED]);

        toasts.retain_active(5.5);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_dismiss_out_of_range_is_ignored() {
        let mut toasts = Toasts::default();
        toasts.push(notifications::DOWNLOADED, 0.0);
        toasts.dismiss(3);
        assert_eq!(toasts.len(), 1);
        toasts.dismiss(0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_toasts_render_title_and_description() {
        let mut state = Toasts::default();
        state.push(notifications::DOWNLOAD_FAILED, 0.0);

        let mut harness = Harness::new_ui_state(
            |ui, toasts_state: &mut Toasts| {
                toasts(toasts_state, ui.ctx());
            },
            state,
        );
        harness.step();

        assert!(harness.query_by_label("Error").is_some());
        assert!(
            harness
                .query_by_label("Failed to download QR code.")
                .is_some()
        );
    }
}
