//! # qrlabel-core
//!
//! Ties the label crates together:
//! - **layout**: deterministic placement of the QR symbol and customer text
//! - **render**: vector PDF output and 1-bit raster output with ESC/POS framing
//! - **pipeline**: `LabelPipeline` and its builder
//! - **error**: `PipelineError`
//!
//! The core performs no I/O of its own. Fonts for the raster path are handed
//! in as `LabelFaces`, resolved by the caller through `FontLibrary`.

// Re-export foundation crates
pub use qrlabel_layout as layout;
pub use qrlabel_traits as traits;
pub use qrlabel_types as types;

// Re-export render crates
pub use qrlabel_render_core as render_core;
pub use qrlabel_render_lopdf as render_lopdf;
pub use qrlabel_render_raster as render_raster;

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DEFAULT_DOTS_PER_MM, LabelPipeline, LabelPipelineBuilder};

// Commonly used types
pub use layout::{FontLibrary, LabelFaces, LayoutConfig, LayoutEngine, LayoutResult};
pub use render_core::RenderError;
pub use render_lopdf::PdfDocument;
pub use render_raster::{EscPosBuilder, RasterLabel, RasterSurface};
pub use types::{Customer, LabelError, LabelRequest, QrPayload, SizeMm};
