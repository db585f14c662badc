use super::atoms::{Atom, join_atom, split_atoms};
use crate::config::FitSpec;
use qrlabel_traits::FontMeasurer;

/// The outcome of fitting a text block into the column.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub lines: Vec<String>,
    pub font_size: f32,
}

/// Greedily packs atoms into lines no wider than `max_width` (exclusive).
///
/// An atom that is wider than `max_width` on its own still gets a line to itself.
pub fn break_lines(
    atoms: &[Atom<'_>],
    font_size: f32,
    bold: bool,
    max_width: f32,
    measurer: &dyn FontMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for &atom in atoms {
        if current.is_empty() {
            current.push_str(atom.text);
            continue;
        }
        let mut candidate = current.clone();
        join_atom(&mut candidate, atom);
        if measurer.measure(&candidate, font_size, bold) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(atom.text);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps `text` at the block's default size, falling back to its minimum size when
/// a single atom cannot fit or the wrapped text needs more than `max_lines` lines.
///
/// There are only two outcomes: default size or minimum size.
pub fn fit_text(
    text: &str,
    spec: &FitSpec,
    max_width: f32,
    measurer: &dyn FontMeasurer,
) -> FittedText {
    let atoms = split_atoms(text);
    if atoms.is_empty() {
        return FittedText {
            lines: Vec::new(),
            font_size: spec.default_size,
        };
    }

    let longest = atoms
        .iter()
        .map(|a| measurer.measure(a.text, spec.default_size, spec.bold))
        .fold(0.0f32, f32::max);

    if longest >= max_width {
        log::debug!(
            "Atom of {:.2}mm exceeds column of {:.2}mm at {}pt, using {}pt",
            longest,
            max_width,
            spec.default_size,
            spec.min_size
        );
        return shrink(&atoms, spec, max_width, measurer);
    }

    let lines = break_lines(&atoms, spec.default_size, spec.bold, max_width, measurer);
    if lines.len() > spec.max_lines {
        log::debug!(
            "{} lines at {}pt exceed limit of {}, using {}pt",
            lines.len(),
            spec.default_size,
            spec.max_lines,
            spec.min_size
        );
        return shrink(&atoms, spec, max_width, measurer);
    }

    FittedText {
        lines,
        font_size: spec.default_size,
    }
}

fn shrink(atoms: &[Atom<'_>], spec: &FitSpec, max_width: f32, measurer: &dyn FontMeasurer) -> FittedText {
    let lines = break_lines(atoms, spec.min_size, spec.bold, max_width, measurer);
    for line in &lines {
        let width = measurer.measure(line, spec.min_size, spec.bold);
        if width >= max_width {
            log::debug!("'{}' overflows the column at {}pt ({:.2}mm)", line, spec.min_size, width);
        }
    }
    FittedText {
        lines,
        font_size: spec.min_size,
    }
}
