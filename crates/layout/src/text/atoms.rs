//! Splitting text into the smallest units a line may break between.

/// A wrap unit and how it attaches to the atom before it on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom<'a> {
    pub text: &'a str,
    /// Continues a hyphenated word, so no space goes in front of it.
    pub glued: bool,
}

/// Splits `text` into wrap atoms.
///
/// Words are separated by whitespace. A hyphenated word is further split
/// after each hyphen, so `"SLAWI-KETANGGUNGAN"` yields `"SLAWI-"` and a glued
/// `"KETANGGUNGAN"`; a line may break after the hyphen without a space being
/// inserted. A dash standing alone between spaces is an ordinary word.
pub fn split_atoms(text: &str) -> Vec<Atom<'_>> {
    text.split_whitespace()
        .flat_map(|word| {
            word.split_inclusive('-')
                .enumerate()
                .map(|(i, piece)| Atom { text: piece, glued: i > 0 })
        })
        .collect()
}

/// Appends `atom` to a line, separated by a space unless it continues a hyphenated word.
pub fn join_atom(line: &mut String, atom: Atom<'_>) {
    if !line.is_empty() && !atom.glued {
        line.push(' ');
    }
    line.push_str(atom.text);
}
