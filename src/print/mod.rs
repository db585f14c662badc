//! Printer output: transports, write policies and the batch print loop.
//!
//! Transports are opaque byte sinks. Device discovery is left to the caller;
//! `probe_transports` only walks an ordered list of candidates.

mod chunked;
mod job;
mod probe;
mod transport;

pub use chunked::ChunkedTransport;
pub use job::{BatchItem, BatchReport, LabelEncoder, PrintJob};
pub use probe::{FileProbe, TransportProbe, probe_transports};
pub use transport::{FileTransport, MemoryTransport, PrinterTransport, TransportError};
