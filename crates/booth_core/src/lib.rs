//! Interaction core for the photobooth kiosk: the swipe/transition state
//! machine, gesture session tracking, the simulated payment session, and QR
//! payload rendering. Everything here is UI-runtime agnostic; callers pass
//! `Instant`s in, which keeps the timing logic deterministic under test.

pub mod gesture;
pub mod payment;
pub mod qr;
pub mod transition;

pub use gesture::{GestureSession, InputChannel};
pub use payment::PaymentSession;
pub use transition::{NavKey, TransitionController, ViewTransform};
