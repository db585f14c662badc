//! Label layout: places the QR symbol and fits the customer text next to it.
//!
//! Everything here is device independent. Positions are millimetres from the
//! label's top-left corner and font sizes are points; the renderers convert
//! to PDF points or printer dots.

pub mod config;
pub mod engine;
pub mod fonts;
pub mod measure;
pub mod output;
pub mod text;

pub use self::config::{FitSpec, LayoutConfig};
pub use self::engine::LayoutEngine;
pub use self::fonts::{FontLibrary, LabelFaces};
pub use self::measure::{FaceMeasurer, SafetyMarginMeasurer, StandardFontMeasurer};
pub use self::output::{LayoutResult, MultiLineBlock, PlacedLine, QrBlock, TextBlock};

pub use qrlabel_traits::FontMeasurer;

#[cfg(test)]
mod engine_test;
#[cfg(test)]
pub(crate) mod test_utils;
