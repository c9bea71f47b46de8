//! The welcome screen: greeting, start button, and the swipe hint.

use std::time::Instant;

use eframe::egui;
use egui::RichText;

use crate::ui::app::KioskApp;
use crate::ui::theme;

pub fn show(app: &mut KioskApp, ui: &mut egui::Ui, now: Instant) {
    let panel_height = ui.available_height();

    ui.vertical_centered(|ui| {
        ui.add_space(panel_height * 0.18);

        ui.label(RichText::new("\u{1F4F7}").size(96.0));
        ui.add_space(16.0);

        ui.label(
            RichText::new("Selamat Datang")
                .size(44.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        ui.label(
            RichText::new("Di Photobooth Kami")
                .size(34.0)
                .color(theme::GOLD),
        );
        ui.add_space(12.0);
        ui.label(
            RichText::new("Abadikan momen indah Anda dengan foto profesional berkualitas tinggi")
                .size(20.0)
                .color(egui::Color32::LIGHT_GRAY),
        );

        ui.add_space(48.0);

        let start = egui::Button::new(
            RichText::new("Mulai Photoshoot \u{25B6}")
                .size(26.0)
                .color(egui::Color32::WHITE),
        )
        .fill(theme::MAROON)
        .corner_radius(28.0)
        .min_size(egui::vec2(320.0, 72.0));
        if ui.add(start).clicked() {
            app.transition.advance(now);
        }

        ui.add_space(32.0);
        ui.label(
            RichText::new("Geser ke kanan untuk melanjutkan \u{2192}")
                .size(18.0)
                .color(egui::Color32::GRAY),
        );
    });
}
