//! The payment screen: QR card, countdown, and the simulated gateway flow.

use std::time::Instant;

use eframe::egui;
use egui::RichText;
use shared::domain::PaymentStatus;
use shared::format;

use crate::ui::app::{KioskApp, QrSurface};
use crate::ui::theme;

pub fn show(app: &mut KioskApp, ui: &mut egui::Ui, now: Instant) {
    // Snapshot everything the layout needs before the widget closures
    // borrow `app` mutably.
    let status = app.payment.as_ref().map(|session| session.status());
    let amount_line = app
        .payment
        .as_ref()
        .map(|session| {
            let descriptor = session.descriptor();
            format::currency(descriptor.amount, &descriptor.currency)
        })
        .unwrap_or_default();
    let remaining_line = app
        .payment
        .as_ref()
        .map(|session| format::countdown(session.remaining(now).as_secs()))
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.add_space(12.0);
        let back = egui::Button::new(RichText::new("\u{2B05} Kembali").size(22.0))
            .fill(egui::Color32::TRANSPARENT);
        if ui.add(back).clicked() {
            app.transition.back(now);
        }
    });

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);

        egui::Frame::NONE
            .fill(theme::CARD)
            .stroke(egui::Stroke::new(2.0, theme::MAROON))
            .corner_radius(18.0)
            .inner_margin(egui::Margin::symmetric(28, 24))
            .show(ui, |ui| {
                ui.set_width(420.0);
                ui.vertical_centered(|ui| {
                    status_row(ui, status);
                    ui.add_space(10.0);

                    ui.label(
                        RichText::new("Scan QR Code")
                            .size(32.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        RichText::new("Untuk melakukan pembayaran")
                            .size(18.0)
                            .color(egui::Color32::LIGHT_GRAY),
                    );
                    ui.add_space(14.0);

                    qr_surface(ui, app.qr.as_ref());
                    ui.add_space(14.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Jumlah:").color(egui::Color32::LIGHT_GRAY));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(&amount_line)
                                        .size(26.0)
                                        .strong()
                                        .color(theme::GOLD),
                                );
                            },
                        );
                    });
                    if status == Some(PaymentStatus::Pending) {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Waktu tersisa:")
                                    .color(egui::Color32::LIGHT_GRAY),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(&remaining_line)
                                            .size(22.0)
                                            .monospace()
                                            .color(egui::Color32::WHITE),
                                    );
                                },
                            );
                        });
                    }
                    ui.add_space(14.0);

                    match status {
                        Some(PaymentStatus::Pending) => {
                            let simulate = egui::Button::new(
                                RichText::new("Simulasi Pembayaran")
                                    .size(22.0)
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(theme::MAROON)
                            .corner_radius(12.0)
                            .min_size(egui::vec2(320.0, 52.0));
                            if ui.add(simulate).clicked() {
                                app.simulate_payment(now);
                            }
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(
                                    "Gunakan aplikasi e-wallet atau mobile banking untuk scan QR",
                                )
                                .size(14.0)
                                .color(egui::Color32::GRAY),
                            );
                        }
                        Some(PaymentStatus::Completed) => {
                            let start = egui::Button::new(
                                RichText::new("Mulai Photoshoot")
                                    .size(22.0)
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(theme::SUCCESS)
                            .corner_radius(12.0)
                            .min_size(egui::vec2(320.0, 52.0));
                            if ui.add(start).clicked() {
                                app.start_photoshoot();
                            }
                        }
                        _ => {}
                    }
                });
            });

        ui.add_space(18.0);
        instructions(ui);
        ui.add_space(10.0);
        ui.label(RichText::new(&app.status).size(14.0).color(egui::Color32::GRAY));
    });
}

fn status_row(ui: &mut egui::Ui, status: Option<PaymentStatus>) {
    let (text, color) = match status {
        Some(PaymentStatus::Processing) => {
            ("\u{1F4B3} Memproses Pembayaran...", theme::GOLD)
        }
        Some(PaymentStatus::Completed) => ("\u{2714} Pembayaran Berhasil!", theme::SUCCESS),
        _ => ("\u{1F550} Menunggu Pembayaran", egui::Color32::LIGHT_GRAY),
    };
    ui.label(RichText::new(text).size(20.0).color(color));
}

fn qr_surface(ui: &mut egui::Ui, qr: Option<&QrSurface>) {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(18, 18))
        .show(ui, |ui| match qr {
            Some(QrSurface::Ready { texture }) => {
                ui.add(egui::Image::new((texture.id(), egui::vec2(260.0, 260.0))));
            }
            _ => {
                // Loading, failed, or no session yet: a neutral placeholder
                // the size the code will occupy.
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(260.0, 260.0), egui::Sense::hover());
                ui.put(
                    rect,
                    egui::Spinner::new().size(56.0).color(theme::MAROON),
                );
            }
        });
}

fn instructions(ui: &mut egui::Ui) {
    ui.label(
        RichText::new("Instruksi Pembayaran:")
            .size(15.0)
            .color(egui::Color32::LIGHT_GRAY),
    );
    for line in [
        "\u{2022} Buka aplikasi e-wallet atau mobile banking",
        "\u{2022} Pilih menu scan QR Code",
        "\u{2022} Arahkan kamera ke QR Code di atas",
        "\u{2022} Konfirmasikan pembayaran",
    ] {
        ui.label(RichText::new(line).size(13.0).color(egui::Color32::GRAY));
    }
}
