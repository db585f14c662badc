use qrlabel_types::{MM_PER_INCH, mm_to_pt};

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Converts a layout position in millimetres (top-left origin) to PDF points (bottom-left origin).
pub fn mm_to_pdf(x_mm: f32, y_mm: f32, page_height_pt: f32) -> (f32, f32) {
    (mm_to_pt(x_mm), flip_y(mm_to_pt(y_mm), page_height_pt))
}

pub fn dots_per_inch(dots_per_mm: f32) -> f32 {
    dots_per_mm * MM_PER_INCH
}

/// Font size in printer dots: `pt / 72 × dpi`.
pub fn pt_to_px(pt: f32, dots_per_mm: f32) -> f32 {
    pt / 72.0 * dots_per_inch(dots_per_mm)
}

pub fn mm_to_px(mm: f32, dots_per_mm: f32) -> f32 {
    mm * dots_per_mm
}
