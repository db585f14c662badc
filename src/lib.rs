//! QR customer labels for thermal printers.
//!
//! The label crates do the layout and rendering; this crate adds what an
//! application around them needs: a JSON configuration file, printer
//! transports and the batch print loop.

pub mod config;
pub mod error;
pub mod print;

pub use config::{AppConfig, FontSettings, PrinterSettings};
pub use error::AppError;
pub use print::{
    BatchItem, BatchReport, ChunkedTransport, FileProbe, FileTransport, LabelEncoder, MemoryTransport, PrintJob,
    PrinterTransport, TransportError, TransportProbe, probe_transports,
};

pub use qrlabel_core::{
    Customer, EscPosBuilder, FontLibrary, LabelError, LabelFaces, LabelPipeline, LabelPipelineBuilder, LabelRequest,
    LayoutConfig, PdfDocument, PipelineError, QrPayload, RasterLabel, SizeMm,
};
