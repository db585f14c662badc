//! Raster label renderer for direct thermal printing.
//!
//! The label is drawn onto an RGBA canvas at the printer's resolution,
//! binarized into a packed 1-bit `RasterSurface` and wrapped in an ESC/POS
//! `GS v 0` raster command by `EscPosBuilder`.

mod canvas;
mod escpos;
mod glyph;
mod renderer;
mod surface;

pub use canvas::Canvas;
pub use escpos::EscPosBuilder;
pub use renderer::{RasterLabel, RasterRenderer};
pub use surface::RasterSurface;
