// src/error.rs
use crate::print::TransportError;
use qrlabel_core::PipelineError;
use qrlabel_traits::FontError;
use qrlabel_types::LabelError;
use thiserror::Error;

/// Errors surfaced by the application layer: configuration, fonts, printing.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid label data: {0}")]
    Label(#[from] LabelError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
