//! Concrete [`FontMeasurer`](qrlabel_traits::FontMeasurer) implementations.

mod face;
mod margin;
mod standard;

pub use face::{FaceMeasurer, shaped_advance_em};
pub use margin::{DEFAULT_SAFETY_FACTOR, SafetyMarginMeasurer};
pub use standard::StandardFontMeasurer;
