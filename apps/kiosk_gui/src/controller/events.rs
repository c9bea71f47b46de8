//! Events flowing from the gateway worker back to the UI.

use shared::domain::TransactionId;

pub enum UiEvent {
    QrReady {
        transaction_id: TransactionId,
        image: image::RgbaImage,
    },
    QrFailed {
        transaction_id: TransactionId,
        reason: String,
    },
    PaymentCompleted {
        transaction_id: TransactionId,
    },
}

impl UiEvent {
    pub fn transaction_id(&self) -> &TransactionId {
        match self {
            UiEvent::QrReady { transaction_id, .. }
            | UiEvent::QrFailed { transaction_id, .. }
            | UiEvent::PaymentCompleted { transaction_id } => transaction_id,
        }
    }

    /// Stale-callback guard: a worker event only applies to the payment
    /// session it was issued for. Anything else (screen already left, session
    /// replaced) is a silent no-op.
    pub fn is_current(&self, active: Option<&TransactionId>) -> bool {
        active == Some(self.transaction_id())
    }
}
