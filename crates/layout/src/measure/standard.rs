//! Advance widths of the PDF base-14 Helvetica faces.
//!
//! The vector renderer draws with the standard `Helvetica` and `Helvetica-Bold`
//! fonts, which every PDF viewer supplies, so their AFM widths are the exact
//! metrics of what ends up on the page.

use qrlabel_traits::FontMeasurer;
use qrlabel_types::pt_to_mm;

/// Widths in 1/1000 em for characters 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a-m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n-z
    389, 280, 389, 584, // {..~
];

// Characters outside ASCII get a capital-letter width so layout errs on the wide side.
const FALLBACK_REGULAR: u16 = 722;
const FALLBACK_BOLD: u16 = 778;

fn char_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match c as u32 {
        code @ 0x20..=0x7E => table[(code - 0x20) as usize],
        _ if bold => FALLBACK_BOLD,
        _ => FALLBACK_REGULAR,
    }
}

/// Measures text with the Helvetica AFM tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMeasurer;

impl StandardFontMeasurer {
    pub fn new() -> Self {
        Self
    }

    /// Width in 1/1000 em.
    pub fn text_units(text: &str, bold: bool) -> u32 {
        text.chars().map(|c| char_width(c, bold) as u32).sum()
    }
}

impl FontMeasurer for StandardFontMeasurer {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        let units = Self::text_units(text, bold) as f32;
        pt_to_mm(units / 1000.0 * font_size_pt)
    }

    fn name(&self) -> &'static str {
        "helvetica-afm"
    }
}
