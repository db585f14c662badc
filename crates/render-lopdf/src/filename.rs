/// Characters that are not allowed in file names on common platforms.
const UNSAFE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const DEFAULT_FILENAME: &str = "label.pdf";

/// Replaces filename-unsafe and control characters with spaces and collapses whitespace.
pub fn sanitize_part(part: &str) -> String {
    let replaced: String = part
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) || c.is_control() { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds the suggested file name for a label document, e.g. `TOKO MAJU - SEMARANG - SMG1024.pdf`.
pub fn document_filename(name: &str, city: &str, id: &str) -> String {
    let parts: Vec<String> = [name, city, id]
        .iter()
        .map(|p| sanitize_part(p))
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    format!("{}.pdf", parts.join(" - "))
}
