//! ESC/POS command building.
//!
//! `EscPosBuilder` is a pure value: each method consumes the builder and
//! returns it with the command appended, and `build` hands over the bytes.

use crate::surface::RasterSurface;

const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;
const FF: u8 = 0x0C;

/// Largest width (in bytes) or height (in dots) a `GS v 0` header can express.
pub const MAX_RASTER_DIMENSION: usize = u16::MAX as usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscPosBuilder {
    buffer: Vec<u8>,
}

impl EscPosBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `ESC @`: reset the printer to its power-on state.
    pub fn initialize(mut self) -> Self {
        self.buffer.extend_from_slice(&[ESC, b'@']);
        self
    }

    /// `GS v 0` in normal density: `1D 76 30 00 xL xH yL yH` then the packed rows.
    ///
    /// The surface must fit the 16-bit header fields (see `MAX_RASTER_DIMENSION`).
    pub fn raster_image(mut self, surface: &RasterSurface) -> Self {
        let width_bytes = surface.bytes_per_row();
        let height = surface.height_px() as usize;
        self.buffer.extend_from_slice(&[
            GS,
            b'v',
            b'0',
            0x00,
            (width_bytes & 0xFF) as u8,
            ((width_bytes >> 8) & 0xFF) as u8,
            (height & 0xFF) as u8,
            ((height >> 8) & 0xFF) as u8,
        ]);
        self.buffer.extend_from_slice(surface.data());
        self
    }

    /// Form feed: advance to the next label on gap-sensing printers.
    pub fn form_feed(mut self) -> Self {
        self.buffer.push(FF);
        self
    }

    /// `ESC d n`: print and feed `n` lines.
    pub fn feed_lines(mut self, n: u8) -> Self {
        self.buffer.extend_from_slice(&[ESC, b'd', n]);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn build(self) -> Vec<u8> {
        self.buffer
    }
}
