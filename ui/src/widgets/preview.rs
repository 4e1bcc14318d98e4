use egui::{Frame, Margin, RichText, Stroke, Ui, Vec2};
use qrgen_business::QrSize;

/// Shows the remote QR image for `url`, or a placeholder when `url` is empty.
pub fn qr_preview(url: &str, size: QrSize, ui: &mut Ui) {
    if url.is_empty() {
        placeholder(ui);
        return;
    }

    let side = f32::from(size.px()).min(ui.available_width());
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Image::new(url.to_owned())
                .fit_to_exact_size(Vec2::splat(side))
                .show_loading_spinner(true),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(url).small().weak());
    });
}

fn placeholder(ui: &mut Ui) {
    Frame::NONE
        .stroke(Stroke::new(1.0, ui.visuals().weak_text_color()))
        .corner_radius(8.0)
        .inner_margin(Margin::same(24))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("QR Code Preview").strong());
                ui.label(RichText::new("Enter text above to generate QR code").weak());
            });
        });
}
