use egui::{Frame, Margin, RichText, Ui};

use crate::{actions::run_action, state::State, widgets};

pub struct QrGenApp {
    state: State,
}

impl QrGenApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for QrGenApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.sync_outcomes(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("QR Code Generator");
                    ui.label("Create QR codes for text, links and more.");
                });
                ui.add_space(12.0);

                card(ui, "Generate QR Code", |ui| {
                    widgets::generation_form(&mut self.state.form, ui);
                });
                ui.add_space(12.0);

                // Built once per frame; the preview and every action see the same URL.
                let url = self.state.qr_url();
                if let Some(stale) = self.state.replace_preview_url(&url) {
                    // Every edit is a new image URL; drop the old bytes and texture.
                    ctx.forget_image(&stale);
                }
                card(ui, "Preview", |ui| {
                    widgets::qr_preview(&url, self.state.form.size, ui);
                    if !url.is_empty() {
                        ui.add_space(8.0);
                        if let Some(kind) = widgets::action_buttons(ui) {
                            run_action(&self.state, kind, ctx);
                        }
                    }
                });
            });
        });

        widgets::toasts(&mut self.state.toasts, ctx);
    }
}

fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).heading().size(18.0));
            ui.add_space(6.0);
            add_contents(ui);
        });
}
