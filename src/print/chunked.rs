use super::transport::{PrinterTransport, TransportError};

/// Splits every write into pieces of at most `max_chunk` bytes, for links
/// with a small maximum write size such as BLE characteristics.
#[derive(Debug)]
pub struct ChunkedTransport<T> {
    inner: T,
    max_chunk: usize,
}

impl<T: PrinterTransport> ChunkedTransport<T> {
    pub fn new(inner: T, max_chunk: usize) -> Self {
        Self { inner, max_chunk: max_chunk.max(1) }
    }

    pub fn max_chunk(&self) -> usize {
        self.max_chunk
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: PrinterTransport> PrinterTransport for ChunkedTransport<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        for chunk in data.chunks(self.max_chunk) {
            self.inner.write_all(chunk)?;
        }
        log::trace!("Wrote {} bytes to {} in {}-byte chunks", data.len(), self.inner.name(), self.max_chunk);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        self.inner.flush()
    }
}
