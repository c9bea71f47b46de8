use std::time::{Duration, Instant};

use booth_core::gesture::InputChannel;
use booth_core::payment::PaymentSession;
use booth_core::transition::{NavKey, TransitionController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{MerchantId, PaymentDescriptor, PaymentStatus, Screen, TransactionId};
use tracing::{debug, info, warn};

use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_worker_command;
use crate::gateway::commands::WorkerCommand;
use crate::ui::{payment, theme, welcome};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub amount: i64,
    pub currency: String,
    pub merchant_id: String,
    pub description: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            amount: 50_000,
            currency: "IDR".to_string(),
            merchant_id: "PHOTOBOOTH_001".to_string(),
            description: "Photobooth Session Payment".to_string(),
        }
    }
}

/// What the payment card's QR area shows. `Failed` keeps the placeholder on
/// screen; the failure itself is only logged.
pub(crate) enum QrSurface {
    Loading,
    Ready { texture: egui::TextureHandle },
    Failed,
}

pub struct KioskApp {
    cmd_tx: Sender<WorkerCommand>,
    ui_rx: Receiver<UiEvent>,
    startup: StartupConfig,

    pub(crate) transition: TransitionController,
    pub(crate) payment: Option<PaymentSession>,
    pub(crate) qr: Option<QrSurface>,
    pub(crate) status: String,

    theme_applied: bool,
}

impl KioskApp {
    pub fn new(
        cmd_tx: Sender<WorkerCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            startup,
            transition: TransitionController::new(),
            payment: None,
            qr: None,
            status: "Selamat datang".to_string(),
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let active = if self.transition.screen() == Screen::Payment {
                self.payment.as_ref().map(|session| session.transaction_id())
            } else {
                None
            };
            if !event.is_current(active) {
                debug!(
                    transaction = %event.transaction_id(),
                    "dropping stale gateway event"
                );
                continue;
            }

            match event {
                UiEvent::QrReady { image, .. } => {
                    let size = [image.width() as usize, image.height() as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
                    let texture =
                        ctx.load_texture("payment-qr", color_image, egui::TextureOptions::NEAREST);
                    self.qr = Some(QrSurface::Ready { texture });
                }
                UiEvent::QrFailed { reason, .. } => {
                    warn!(reason = %reason, "qr unavailable; keeping placeholder");
                    self.qr = Some(QrSurface::Failed);
                }
                UiEvent::PaymentCompleted { .. } => {
                    if let Some(session) = &mut self.payment {
                        if session.complete() {
                            self.status = "Pembayaran berhasil".to_string();
                        }
                    }
                }
            }
        }
    }

    fn pump_input(&mut self, ctx: &egui::Context, now: Instant) {
        ctx.input(|input| {
            for event in &input.events {
                if let egui::Event::Touch { phase, pos, .. } = event {
                    match phase {
                        egui::TouchPhase::Start => {
                            self.transition.on_gesture_start(InputChannel::Touch, pos.x)
                        }
                        egui::TouchPhase::Move => {
                            self.transition.on_gesture_move(InputChannel::Touch, pos.x)
                        }
                        egui::TouchPhase::End => {
                            self.transition.on_gesture_end(InputChannel::Touch, now)
                        }
                        egui::TouchPhase::Cancel => {
                            self.transition.on_gesture_cancel(InputChannel::Touch)
                        }
                    }
                }
            }

            if input.pointer.primary_pressed() {
                if let Some(pos) = input.pointer.interact_pos() {
                    self.transition.on_gesture_start(InputChannel::Mouse, pos.x);
                }
            } else if input.pointer.primary_down() {
                if let Some(pos) = input.pointer.latest_pos() {
                    self.transition.on_gesture_move(InputChannel::Mouse, pos.x);
                }
            } else if input.pointer.primary_released() {
                self.transition.on_gesture_end(InputChannel::Mouse, now);
            }

            if input.key_pressed(egui::Key::ArrowRight) {
                self.transition.on_key(NavKey::Forward, now);
            }
            if input.key_pressed(egui::Key::ArrowLeft) {
                self.transition.on_key(NavKey::Back, now);
            }
        });
    }

    fn begin_payment_session(&mut self, now: Instant) {
        let descriptor = PaymentDescriptor::new(
            self.startup.amount,
            self.startup.currency.clone(),
            MerchantId(self.startup.merchant_id.clone()),
            TransactionId::mint(),
            self.startup.description.clone(),
        );
        info!(transaction = %descriptor.transaction_id, "payment session opened");

        self.qr = Some(QrSurface::Loading);
        self.status = "Menunggu pembayaran".to_string();
        dispatch_worker_command(
            &self.cmd_tx,
            WorkerCommand::GenerateQr {
                descriptor: descriptor.clone(),
            },
            &mut self.status,
        );
        self.payment = Some(PaymentSession::new(descriptor, now));
    }

    fn end_payment_session(&mut self) {
        if let Some(session) = &self.payment {
            info!(transaction = %session.transaction_id(), "payment session dismissed");
        }
        self.payment = None;
        self.qr = None;
        self.status = "Selamat datang".to_string();
    }

    pub(crate) fn simulate_payment(&mut self, now: Instant) {
        let Some(session) = &mut self.payment else {
            return;
        };
        if !session.simulate(now) {
            return;
        }
        let transaction_id = session.transaction_id().clone();
        self.status = "Memproses pembayaran...".to_string();
        dispatch_worker_command(
            &self.cmd_tx,
            WorkerCommand::SimulatePayment { transaction_id },
            &mut self.status,
        );
    }

    pub(crate) fn start_photoshoot(&mut self) {
        // The capture flow lives outside this front-end; hand-off is a log
        // line and a status update.
        info!("photoshoot session starting");
        self.status = "Mengarahkan ke sesi foto...".to_string();
    }

    fn show_transition_overlay(&self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("transition_dim"),
        ))
        .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(64));

        egui::Area::new(egui::Id::new("transition_spinner"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.center() - egui::vec2(24.0, 24.0))
            .show(ctx, |ui| {
                ui.add(egui::Spinner::new().size(48.0).color(theme::MAROON_LIGHT));
            });
    }

    fn wants_repaint_for_payment(&self) -> bool {
        self.payment
            .as_ref()
            .is_some_and(|session| session.status() != PaymentStatus::Completed)
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();

        // Commit a due animation before anything renders, so the screen
        // swap and the transform reset land in the same frame.
        if let Some(committed) = self.transition.tick(now) {
            match committed {
                Screen::Payment => self.begin_payment_session(now),
                Screen::Welcome => self.end_payment_session(),
            }
        }

        self.process_ui_events(ctx);
        self.pump_input(ctx, now);

        let transform = self
            .transition
            .transform(now, ctx.screen_rect().width());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                let offset_rect = panel_rect.translate(egui::vec2(transform.offset_x, 0.0));
                let mut content = ui.new_child(
                    egui::UiBuilder::new()
                        .max_rect(offset_rect)
                        .layout(egui::Layout::top_down(egui::Align::Min)),
                );
                content.set_clip_rect(panel_rect);
                content.set_opacity(transform.opacity);

                match self.transition.screen() {
                    Screen::Welcome => welcome::show(self, &mut content, now),
                    Screen::Payment => payment::show(self, &mut content, now),
                }
            });

        if self.transition.is_animating() {
            self.show_transition_overlay(ctx);
            ctx.request_repaint();
        } else if self.transition.has_active_gesture() {
            ctx.request_repaint();
        } else if self.wants_repaint_for_payment() {
            // Countdown/processing text only needs coarse updates.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
