#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use qrlabel::{LabelFaces, LabelPipeline, LabelRequest, PipelineError};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Generate a label PDF with the default pipeline.
pub fn generate_pdf(request: &LabelRequest, quantity: u32) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = LabelPipeline::builder().build()?;
    let pdf = pipeline.generate_pdf(request, quantity)?;
    let doc = LopdfDocument::load_mem(&pdf.bytes)?;
    Ok(GeneratedPdf { bytes: pdf.bytes, filename: pdf.filename, doc })
}

/// DejaVu Sans regular and bold from the repository's font assets.
pub fn bundled_faces() -> LabelFaces {
    let regular = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
    let bold = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
    LabelFaces::new(Arc::new(regular.to_vec()), Arc::new(bold.to_vec())).expect("bundled fonts parse")
}

pub fn raster_pipeline(faces: LabelFaces) -> Result<LabelPipeline, PipelineError> {
    LabelPipeline::builder().with_faces(faces).with_dots_per_mm(8.0).build()
}
