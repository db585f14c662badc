//! QR symbol encoding.
//!
//! Labels always use error-correction level M and no quiet zone: the label
//! margins provide the white border.

use crate::error::RenderError;
use qrcode::{Color, EcLevel, QrCode};

/// The dark/light module grid of an encoded QR symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// # Errors
    ///
    /// Returns `RenderError::Encoding` when the payload does not fit any QR version.
    pub fn encode(payload: &str) -> Result<Self, RenderError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|e| RenderError::Encoding(format!("{} ({} bytes)", e, payload.len())))?;
        let width = code.width();
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        log::debug!("Encoded {} byte payload into {}x{} QR", payload.len(), width, width);
        Ok(Self { width, modules })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// One 8-bit gray sample per module (0 = black, 255 = white), row-major.
    pub fn to_gray_samples(&self) -> Vec<u8> {
        self.modules.iter().map(|&dark| if dark { 0 } else { 255 }).collect()
    }
}
