use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Label size must be positive and finite, got {width}x{height} mm")]
    InvalidSize { width: f32, height: f32 },
    #[error("{field} must be finite, got {value}")]
    InvalidOffset { field: &'static str, value: f32 },
    #[error("QR payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
