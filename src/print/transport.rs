use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport '{name}' is unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("No printer transport available (tried: {})", .0.join(", "))]
    NoneAvailable(Vec<String>),
}

/// A byte sink that reaches a printer. Writes are issued by one owner at a time.
pub trait PrinterTransport: Send {
    fn name(&self) -> &str;

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError>;

    fn flush(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

impl<T: PrinterTransport + ?Sized> PrinterTransport for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        (**self).write_all(data)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        (**self).flush()
    }
}

/// Appends to a file or a character device such as `/dev/usb/lp0`.
#[derive(Debug)]
pub struct FileTransport {
    name: String,
    file: File,
}

impl FileTransport {
    /// Opens `path` for appending, creating a regular file if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_file(path.to_path_buf(), file))
    }

    /// Opens an existing path only; device nodes are never created.
    pub fn open_existing<P: AsRef<Path>>(path: P) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let file = OpenOptions::new().append(true).open(path).map_err(|e| TransportError::Unavailable {
            name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_file(path.to_path_buf(), file))
    }

    fn from_file(path: PathBuf, file: File) -> Self {
        Self { name: path.display().to_string(), file }
    }
}

impl PrinterTransport for FileTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.file.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        self.file.flush()?;
        Ok(())
    }
}

/// Records every write; used in tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Individual writes, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Everything written, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl PrinterTransport for MemoryTransport {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.writes.push(data.to_vec());
        Ok(())
    }
}
