//! Defines the error type for pipeline operations.

use qrlabel_render_core::RenderError;
use qrlabel_traits::FontError;
use qrlabel_types::LabelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Invalid label: {0}")]
    Label(#[from] LabelError),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
}
