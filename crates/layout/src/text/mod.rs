pub mod atoms;
pub mod wrapper;

pub use atoms::{Atom, join_atom, split_atoms};
pub use wrapper::{FittedText, break_lines, fit_text};
