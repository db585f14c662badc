//! Core rendering abstractions for label output.
//!
//! This crate provides the pieces both label backends share:
//! - `LabelRenderer` trait: layout with the backend's own measurer, then draw
//! - `RenderError` for rendering operations
//! - `QrMatrix`, the encoded QR symbol as a module grid
//! - unit conversion helpers between millimetres, points and printer dots

mod error;
pub mod qr;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use qr::QrMatrix;
pub use traits::LabelRenderer;
