//! Command orchestration helpers from UI actions to the gateway worker.

use crossbeam_channel::{Sender, TrySendError};

use crate::gateway::commands::WorkerCommand;

pub fn dispatch_worker_command(
    cmd_tx: &Sender<WorkerCommand>,
    cmd: WorkerCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->gateway command"),
        Err(TrySendError::Full(_)) => {
            *status = "Kiosk worker queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Kiosk worker stopped (possible startup failure); restart the kiosk"
                .to_string();
        }
    }
}
