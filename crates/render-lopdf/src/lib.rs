//! Vector label renderer using lopdf.
//!
//! Produces one PDF page per printed copy, sized to the label, with the QR
//! symbol as a shared image XObject and text in the base-14 Helvetica fonts.

mod filename;
mod renderer;

pub use filename::{document_filename, sanitize_part};
pub use renderer::{PdfDocument, VectorRenderer};
