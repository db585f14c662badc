use qrlabel_traits::FontError;
use qrlabel_types::LabelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("QR encoding failed: {0}")]
    Encoding(String),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Raster error: {0}")]
    Raster(String),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
    #[error("Invalid label: {0}")]
    Label(#[from] LabelError),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
