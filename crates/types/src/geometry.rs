use serde::{Deserialize, Serialize};

/// Millimetres per typographic point (1pt = 1/72 inch).
pub const MM_PER_PT: f32 = 25.4 / 72.0;
pub const MM_PER_INCH: f32 = 25.4;

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Physical label dimensions in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeMm {
    pub width: f32,
    pub height: f32,
}

impl SizeMm {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The same size expressed in PDF points.
    pub fn to_pt(self) -> (f32, f32) {
        (mm_to_pt(self.width), mm_to_pt(self.height))
    }
}
