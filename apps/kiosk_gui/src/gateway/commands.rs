use shared::domain::{PaymentDescriptor, TransactionId};

pub enum WorkerCommand {
    GenerateQr {
        descriptor: PaymentDescriptor,
    },
    SimulatePayment {
        transaction_id: TransactionId,
    },
}

impl WorkerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            WorkerCommand::GenerateQr { .. } => "generate_qr",
            WorkerCommand::SimulatePayment { .. } => "simulate_payment",
        }
    }
}
