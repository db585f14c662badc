use crate::engine::LayoutEngine;
use crate::fonts::LabelFaces;
use crate::measure::StandardFontMeasurer;
use crate::output::LayoutResult;
use qrlabel_traits::FontMeasurer;
use qrlabel_types::{LabelRequest, SizeMm};
use rand::Rng;
use std::sync::Arc;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A monospace measurer: `mm_per_char` millimetres per character at 10pt.
#[derive(Debug, Clone, Copy)]
pub struct MonoMeasurer {
    mm_per_char: f32,
}

impl MonoMeasurer {
    pub fn new(mm_per_char: f32) -> Self {
        Self { mm_per_char }
    }
}

impl FontMeasurer for MonoMeasurer {
    fn measure(&self, text: &str, font_size_pt: f32, _bold: bool) -> f32 {
        text.chars().count() as f32 * self.mm_per_char * (font_size_pt / 10.0)
    }
}

pub fn request(name: &str, city: &str, width: f32, height: f32) -> LabelRequest {
    LabelRequest {
        id_text: "SMG1024".to_string(),
        name_text: name.to_string(),
        city_text: city.to_string(),
        branch_text: "BT SMG".to_string(),
        qr_payload: "SMG1024".to_string(),
        size_mm: SizeMm::new(width, height),
        ..Default::default()
    }
}

/// DejaVu Sans regular and bold from the repository's font assets.
pub fn bundled_faces() -> LabelFaces {
    let regular = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
    let bold = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");
    LabelFaces::new(Arc::new(regular.to_vec()), Arc::new(bold.to_vec())).unwrap()
}

pub fn layout_with_afm(req: &LabelRequest) -> LayoutResult {
    LayoutEngine::default().compute(req, &StandardFontMeasurer::new())
}

/// Printable text of up to `max_len` characters with spaces and hyphens mixed in.
pub fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz 0123456789 -.&/";
    let len = rng.random_range(0..=max_len);
    (0..len)
        .filter_map(|_| ALPHABET.choose(rng).map(|&b| b as char))
        .collect()
}
