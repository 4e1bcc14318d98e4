//! The input form: payload, size, error correction and colors.

use egui::{ComboBox, Slider, TextEdit, Ui};
use qrgen_business::{ErrorCorrection, GenerationRequest, QrSize};

use crate::utils::colors::{parse_hex, to_hex};

pub fn generation_form(form: &mut GenerationRequest, ui: &mut Ui) {
    ui.label("Text or URL");
    ui.add(
        TextEdit::multiline(&mut form.payload)
            .hint_text("Enter text, URL, or any data...")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    size_slider(&mut form.size, ui);
    ui.add_space(8.0);

    ComboBox::from_label("Error Correction")
        .selected_text(form.error_correction.label())
        .show_ui(ui, |ui| {
            for level in ErrorCorrection::ALL {
                ui.selectable_value(&mut form.error_correction, level, level.label());
            }
        });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        color_field("Foreground Color", &mut form.foreground_color, &mut columns[0]);
        color_field("Background Color", &mut form.background_color, &mut columns[1]);
    });
}

fn size_slider(size: &mut QrSize, ui: &mut Ui) {
    ui.label(format!("Size: {size}"));

    let mut px = u32::from(size.px());
    let response = ui.add(
        Slider::new(&mut px, u32::from(QrSize::MIN)..=u32::from(QrSize::MAX))
            .step_by(f64::from(QrSize::STEP))
            .show_value(false),
    );
    if response.changed() {
        *size = QrSize::new(px);
    }
}

/// Color picker plus a free-form hex field bound to the same string.
fn color_field(label: &str, hex: &mut String, ui: &mut Ui) {
    ui.label(label);
    ui.horizontal(|ui| {
        // Unparsable input keeps the text as typed; the picker shows black until it parses.
        let mut color = parse_hex(hex).unwrap_or(egui::Color32::BLACK);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *hex = to_hex(color);
        }
        ui.add(TextEdit::singleline(hex).desired_width(80.0));
    });
}
