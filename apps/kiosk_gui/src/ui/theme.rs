//! The booth's maroon-and-gold kiosk palette.

use eframe::egui;
use egui::Color32;

pub const MAROON: Color32 = Color32::from_rgb(0x8b, 0x15, 0x38);
pub const MAROON_LIGHT: Color32 = Color32::from_rgb(0xa8, 0x2b, 0x4f);
pub const GOLD: Color32 = Color32::from_rgb(0xd4, 0xaf, 0x37);
pub const BACKGROUND: Color32 = Color32::from_rgb(0x1a, 0x12, 0x15);
pub const CARD: Color32 = Color32::from_rgb(0x26, 0x1b, 0x1f);
pub const SUCCESS: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = CARD;
    style.visuals.selection.bg_fill = MAROON;
    style.visuals.widgets.hovered.bg_fill = MAROON_LIGHT;
    style.visuals.widgets.active.bg_fill = MAROON;

    // Kiosk text is read at arm's length; scale every style up.
    for font in style.text_styles.values_mut() {
        font.size *= 1.35;
    }
    style.spacing.button_padding = egui::vec2(18.0, 12.0);
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    ctx.set_style(style);
}
