//! Worker-thread bridge: QR encoding and the simulated payment gateway run
//! off the UI thread and report back over the event channel.

pub mod commands;
pub mod runtime;
