pub mod error;
pub mod geometry;
pub mod label;
pub mod payload;

pub use error::LabelError;
pub use geometry::{MM_PER_INCH, MM_PER_PT, SizeMm, mm_to_pt, pt_to_mm};
pub use label::{Customer, LabelRequest};
pub use payload::QrPayload;
