use crate::fonts::LabelFaces;
use qrlabel_traits::{FontError, FontMeasurer};
use qrlabel_types::pt_to_mm;
use rustybuzz::UnicodeBuffer;

/// Measures text by shaping it with the TrueType faces the raster renderer draws with.
///
/// Both faces are parsed once up front and borrowed from the `LabelFaces`
/// they came from, so a measurer lives for one layout or drawing pass.
pub struct FaceMeasurer<'a> {
    regular: rustybuzz::Face<'a>,
    bold: rustybuzz::Face<'a>,
}

impl<'a> FaceMeasurer<'a> {
    pub fn new(faces: &'a LabelFaces) -> Result<Self, FontError> {
        let parse = |bold: bool| {
            faces
                .face(bold)
                .ok_or_else(|| FontError::InvalidData(format!("label face (bold: {}) failed to parse", bold)))
        };
        Ok(Self {
            regular: parse(false)?,
            bold: parse(true)?,
        })
    }

    pub fn face(&self, bold: bool) -> &rustybuzz::Face<'a> {
        if bold { &self.bold } else { &self.regular }
    }
}

/// Sum of shaped advances of `text`, in em units of the face.
pub fn shaped_advance_em(face: &rustybuzz::Face<'_>, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    let glyphs = rustybuzz::shape(face, &[], buffer);
    let advance: i32 = glyphs.glyph_positions().iter().map(|p| p.x_advance).sum();
    advance as f32 / face.units_per_em() as f32
}

impl FontMeasurer for FaceMeasurer<'_> {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        pt_to_mm(shaped_advance_em(self.face(bold), text) * font_size_pt)
    }

    fn name(&self) -> &'static str {
        "truetype-face"
    }
}
