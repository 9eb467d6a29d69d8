//! ASCII "X" patterns drawn in a square grid.
//!
//! Row `r` of a size-`n` pattern carries the mark at columns `r` and
//! `n - 1 - r`; everything else is filled.

pub mod printer;
pub mod style;

pub use printer::{string_pattern, string_pattern_with};
pub use style::PatternStyle;
