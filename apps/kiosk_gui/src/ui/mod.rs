//! UI layer for the kiosk: app shell, screens, and theme.

pub mod app;
pub mod payment;
pub mod theme;
pub mod welcome;

pub use app::{KioskApp, StartupConfig};
