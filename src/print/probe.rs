use super::transport::{FileTransport, PrinterTransport, TransportError};
use std::path::PathBuf;

/// A candidate transport that may or may not be usable right now.
pub trait TransportProbe {
    fn name(&self) -> &str;

    fn open(&self) -> Result<Box<dyn PrinterTransport>, TransportError>;
}

/// Probes a device node or file path that must already exist.
#[derive(Debug, Clone)]
pub struct FileProbe {
    path: PathBuf,
    name: String,
}

impl FileProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl TransportProbe for FileProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<Box<dyn PrinterTransport>, TransportError> {
        Ok(Box::new(FileTransport::open_existing(&self.path)?))
    }
}

/// Opens the first candidate that succeeds, in priority order.
///
/// # Errors
///
/// Returns `TransportError::NoneAvailable` naming every candidate tried.
pub fn probe_transports(candidates: &[&dyn TransportProbe]) -> Result<Box<dyn PrinterTransport>, TransportError> {
    let mut tried = Vec::with_capacity(candidates.len());
    for probe in candidates {
        match probe.open() {
            Ok(transport) => {
                log::info!("Using printer transport '{}'", probe.name());
                return Ok(transport);
            }
            Err(e) => {
                log::debug!("Transport '{}' unavailable: {}", probe.name(), e);
                tried.push(probe.name().to_string());
            }
        }
    }
    Err(TransportError::NoneAvailable(tried))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::MemoryTransport;

    struct Unavailable(&'static str);

    impl TransportProbe for Unavailable {
        fn name(&self) -> &str {
            self.0
        }

        fn open(&self) -> Result<Box<dyn PrinterTransport>, TransportError> {
            Err(TransportError::Unavailable { name: self.0.to_string(), reason: "not connected".to_string() })
        }
    }

    struct Memory;

    impl TransportProbe for Memory {
        fn name(&self) -> &str {
            "memory"
        }

        fn open(&self) -> Result<Box<dyn PrinterTransport>, TransportError> {
            Ok(Box::new(MemoryTransport::new()))
        }
    }

    #[test]
    fn test_first_available_wins() {
        let usb = Unavailable("usb");
        let memory = Memory;
        let dir = tempfile::tempdir().unwrap();
        let file = FileProbe::new(dir.path().join("lp0"));

        let transport = probe_transports(&[&usb, &file, &memory]).unwrap();
        assert_eq!(transport.name(), "memory");
    }

    #[test]
    fn test_existing_file_probe_opens() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let probe = FileProbe::new(file.path());
        let transport = probe_transports(&[&Unavailable("ble"), &probe]).unwrap();
        assert_eq!(transport.name(), file.path().display().to_string());
    }

    #[test]
    fn test_none_available_lists_candidates() {
        match probe_transports(&[&Unavailable("usb"), &Unavailable("serial")]) {
            Err(TransportError::NoneAvailable(tried)) => assert_eq!(tried, vec!["usb", "serial"]),
            other => panic!("unexpected result: {:?}", other.map(|t| t.name().to_string())),
        }
    }
}
