use egui::Ui;
use qrgen_business::ActionKind;

/// Download / Copy URL / Share row. Returns the action the user clicked.
pub fn action_buttons(ui: &mut Ui) -> Option<ActionKind> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (kind, text) in [
            (ActionKind::Download, "Download"),
            (ActionKind::Copy, "Copy URL"),
            (ActionKind::Share, "Share"),
        ] {
            if ui.button(text).clicked() {
                clicked = Some(kind);
            }
        }
    });
    clicked
}
