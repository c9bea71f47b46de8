mod controller;
mod gateway;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::controller::events::UiEvent;
use crate::gateway::commands::WorkerCommand;
use crate::gateway::runtime::spawn_gateway_thread;
use crate::ui::{KioskApp, StartupConfig};

/// Photobooth kiosk front-end: welcome screen, swipe navigation, and a
/// simulated QR payment screen.
#[derive(Debug, Parser)]
#[command(name = "kiosk_gui")]
struct Args {
    /// Session price in minor currency units.
    #[arg(long, default_value_t = 50_000)]
    amount: i64,
    /// ISO currency code shown on the payment card.
    #[arg(long, default_value = "IDR")]
    currency: String,
    /// Merchant id embedded in the payment QR payload.
    #[arg(long, default_value = "PHOTOBOOTH_001")]
    merchant_id: String,
    /// Run in a window instead of kiosk fullscreen.
    #[arg(long)]
    windowed: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig {
        amount: args.amount,
        currency: args.currency,
        merchant_id: args.merchant_id,
        description: "Photobooth Session Payment".to_string(),
    };

    let (cmd_tx, cmd_rx) = bounded::<WorkerCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_gateway_thread(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Photobooth Kiosk")
            .with_inner_size([820.0, 1180.0])
            .with_min_inner_size([480.0, 720.0])
            .with_fullscreen(!args.windowed),
        ..Default::default()
    };
    eframe::run_native(
        "Photobooth Kiosk",
        options,
        Box::new(move |_cc| Ok(Box::new(KioskApp::new(cmd_tx, ui_rx, startup)))),
    )
}
