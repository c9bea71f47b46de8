//! The payment screen's session state: a five-minute countdown and the
//! pending → processing → completed status machine. Completion arrives from
//! the simulated gateway after a fixed delay; the session itself never
//! schedules timers.

use std::time::{Duration, Instant};

use shared::domain::{PaymentDescriptor, PaymentStatus, TransactionId};
use tracing::info;

/// How long the customer has to scan and pay.
pub const PAYMENT_WINDOW: Duration = Duration::from_secs(300);
/// The simulated gateway reports completion this long after "payment".
pub const GATEWAY_SIMULATION_DELAY: Duration = Duration::from_secs(3);

pub struct PaymentSession {
    descriptor: PaymentDescriptor,
    started_at: Instant,
    status: PaymentStatus,
    // Remaining time captured when the countdown stops ticking (the
    // countdown only runs while the payment is still pending).
    frozen_remaining: Option<Duration>,
}

impl PaymentSession {
    pub fn new(descriptor: PaymentDescriptor, now: Instant) -> Self {
        Self {
            descriptor,
            started_at: now,
            status: PaymentStatus::Pending,
            frozen_remaining: None,
        }
    }

    pub fn descriptor(&self) -> &PaymentDescriptor {
        &self.descriptor
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.descriptor.transaction_id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Seconds left on the payment window, clamped at zero. Frozen at its
    /// last pending value once the payment leaves `Pending`.
    pub fn remaining(&self, now: Instant) -> Duration {
        if let Some(frozen) = self.frozen_remaining {
            return frozen;
        }
        PAYMENT_WINDOW.saturating_sub(now.duration_since(self.started_at))
    }

    /// Customer pressed the simulate button: `Pending -> Processing`.
    /// Returns false (and does nothing) from any other status.
    pub fn simulate(&mut self, now: Instant) -> bool {
        if self.status != PaymentStatus::Pending {
            return false;
        }
        self.frozen_remaining = Some(self.remaining(now));
        self.status = PaymentStatus::Processing;
        info!(transaction = %self.descriptor.transaction_id, "simulated payment started");
        true
    }

    /// Gateway reported completion: `Processing -> Completed`. Late or
    /// duplicate reports are ignored.
    pub fn complete(&mut self) -> bool {
        if self.status != PaymentStatus::Processing {
            return false;
        }
        self.status = PaymentStatus::Completed;
        info!(transaction = %self.descriptor.transaction_id, "payment completed");
        true
    }
}

#[cfg(test)]
#[path = "tests/payment_tests.rs"]
mod tests;
