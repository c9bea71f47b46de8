use std::thread;

use booth_core::payment::GATEWAY_SIMULATION_DELAY;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, warn};

use crate::controller::events::UiEvent;
use crate::gateway::commands::WorkerCommand;

/// Spawns the gateway worker. The thread owns a small tokio runtime so the
/// simulated gateway delay runs as a task while the command loop keeps
/// draining. Dropping the command sender shuts the worker down; completions
/// that lose the race against shutdown fail to deliver and are dropped.
pub fn spawn_gateway_thread(cmd_rx: Receiver<WorkerCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(error = %err, "failed to build gateway worker runtime");
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                debug!(command = cmd.name(), "gateway worker picked up command");
                match cmd {
                    WorkerCommand::GenerateQr { descriptor } => {
                        let transaction_id = descriptor.transaction_id.clone();
                        match booth_core::qr::payment_qr_image(&descriptor) {
                            Ok(image) => {
                                let _ = ui_tx.try_send(UiEvent::QrReady {
                                    transaction_id,
                                    image,
                                });
                            }
                            Err(err) => {
                                warn!(
                                    transaction = %transaction_id,
                                    error = %err,
                                    "qr encoding failed; payment screen keeps its placeholder"
                                );
                                let _ = ui_tx.try_send(UiEvent::QrFailed {
                                    transaction_id,
                                    reason: err.to_string(),
                                });
                            }
                        }
                    }
                    WorkerCommand::SimulatePayment { transaction_id } => {
                        // Completion is deferred; the UI drops it if the
                        // session is no longer current by then.
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep(GATEWAY_SIMULATION_DELAY).await;
                            let _ = ui_tx.try_send(UiEvent::PaymentCompleted { transaction_id });
                        });
                    }
                }
            }
        });
    });
}
