//! Controller layer: worker events and command orchestration for the kiosk.

pub mod events;
pub mod orchestration;
