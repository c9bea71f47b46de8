//! Renders the payment descriptor into a scannable QR bitmap. The payload
//! is the descriptor's JSON wire form; the bitmap uses the booth's maroon
//! on white with a two-module quiet zone, scaled to roughly 300 px.

use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};
use shared::domain::PaymentDescriptor;
use thiserror::Error;

/// Approximate edge length of the rendered bitmap, in pixels.
pub const TARGET_SIZE_PX: u32 = 300;
/// Quiet-zone width, in modules, on every side.
pub const QUIET_ZONE_MODULES: u32 = 2;

const DARK: Rgba<u8> = Rgba([0x8b, 0x15, 0x38, 0xff]);
const LIGHT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to serialize payment descriptor: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("payment payload does not fit in a qr code: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Encodes the descriptor into a ready-to-upload RGBA bitmap.
pub fn payment_qr_image(descriptor: &PaymentDescriptor) -> Result<RgbaImage, QrError> {
    let payload = serde_json::to_string(descriptor)?;
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
    Ok(rasterize(&code))
}

fn rasterize(code: &QrCode) -> RgbaImage {
    let modules = code.width() as u32;
    let total_modules = modules + 2 * QUIET_ZONE_MODULES;
    let scale = (TARGET_SIZE_PX / total_modules).max(1);
    let size = total_modules * scale;
    let colors = code.to_colors();

    RgbaImage::from_fn(size, size, |x, y| {
        let module_x = x / scale;
        let module_y = y / scale;
        let in_quiet_zone = module_x < QUIET_ZONE_MODULES
            || module_y < QUIET_ZONE_MODULES
            || module_x >= QUIET_ZONE_MODULES + modules
            || module_y >= QUIET_ZONE_MODULES + modules;
        if in_quiet_zone {
            return LIGHT;
        }
        let col = (module_x - QUIET_ZONE_MODULES) as usize;
        let row = (module_y - QUIET_ZONE_MODULES) as usize;
        match colors[row * modules as usize + col] {
            qrcode::Color::Dark => DARK,
            qrcode::Color::Light => LIGHT,
        }
    })
}
