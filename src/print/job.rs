use super::transport::PrinterTransport;
use crate::config::PrinterSettings;
use qrlabel_core::{EscPosBuilder, LabelPipeline, LabelRequest, PipelineError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Turns a label request into printer bytes.
pub trait LabelEncoder {
    fn encode(&self, request: &LabelRequest) -> Result<Vec<u8>, PipelineError>;
}

impl LabelEncoder for LabelPipeline {
    fn encode(&self, request: &LabelRequest) -> Result<Vec<u8>, PipelineError> {
        Ok(self.render_raster(request)?.commands)
    }
}

/// One entry of a batch file: a label and how many copies to print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(flatten)]
    pub request: LabelRequest,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl From<LabelRequest> for BatchItem {
    fn from(request: LabelRequest) -> Self {
        Self { request, quantity: 1 }
    }
}

/// Outcome of a batch; one count per physical label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub printed: usize,
    pub failed: usize,
}

/// Prints batches of labels one after another through a single transport.
pub struct PrintJob<E> {
    encoder: E,
    form_feed: bool,
    delay: Duration,
}

impl<E: LabelEncoder> PrintJob<E> {
    pub fn new(encoder: E, settings: &PrinterSettings) -> Self {
        Self {
            encoder,
            form_feed: settings.form_feed,
            delay: settings.inter_label_delay(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_form_feed(mut self, form_feed: bool) -> Self {
        self.form_feed = form_feed;
        self
    }

    /// Encodes one label with the configured trailer.
    pub fn label_bytes(&self, request: &LabelRequest) -> Result<Vec<u8>, PipelineError> {
        let builder = EscPosBuilder::new().raw(&self.encoder.encode(request)?);
        let builder = if self.form_feed { builder.form_feed() } else { builder };
        Ok(builder.build())
    }

    /// Prints every copy of every item, pausing between labels but not after the last.
    ///
    /// A label that fails to render or write is logged and skipped; the batch carries on.
    pub async fn print_batch<T>(&self, items: &[BatchItem], transport: &mut T) -> BatchReport
    where
        T: PrinterTransport + ?Sized,
    {
        let mut report = BatchReport::default();
        let total: usize = items.iter().map(|i| i.quantity.max(1) as usize).sum();
        let mut index = 0;

        for item in items {
            // Encode once per item; copies are byte-identical.
            let encoded = self.label_bytes(&item.request);
            for _ in 0..item.quantity.max(1) {
                if index > 0 && !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                index += 1;

                let bytes = match &encoded {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        log::warn!("Skipping label {}/{} ('{}'): {}", index, total, item.request.id_text, e);
                        report.failed += 1;
                        continue;
                    }
                };
                match transport.write_all(bytes) {
                    Ok(()) => {
                        report.printed += 1;
                        log::debug!("Printed label {}/{} on {}", index, total, transport.name());
                    }
                    Err(e) => {
                        log::warn!("Failed to send label {}/{} to {}: {}", index, total, transport.name(), e);
                        report.failed += 1;
                    }
                }
            }
        }

        if let Err(e) = transport.flush() {
            log::warn!("Flushing {} failed: {}", transport.name(), e);
        }
        log::info!("Batch finished: {} printed, {} failed", report.printed, report.failed);
        report
    }
}
