//! Shared color constants and hex conversion for the UI.

use egui::Color32;

/// Forest green color for success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error toasts.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form.
///
/// Returns `None` for anything else; the form keeps whatever the user typed
/// and only the color picker needs a parsed value.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&digits[i..=i], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some(Color32::from_rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Lowercase `#rrggbb`; alpha is dropped.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
