//! "X" pattern rendering.
//!
//! ```
//! use drill_kit::pattern::string_pattern;
//!
//! let x = string_pattern(3).unwrap();
//! assert_eq!(x, "+-+\n-+-\n+-+\n");
//! ```

use super::style::PatternStyle;
use crate::core::{DrillError, Result};

/// Render a `size` x `size` "X" with the default `+`/`-` style.
///
/// Every row is newline-terminated, including the last one.
/// Fails with `DrillError::PatternTooSmall` when `size <= 2`.
pub fn string_pattern(size: usize) -> Result<String> {
    string_pattern_with(size, &PatternStyle::default())
}

/// Render a `size` x `size` "X" using the given drawing characters.
pub fn string_pattern_with(size: usize, style: &PatternStyle) -> Result<String> {
    if size <= 2 {
        log::debug!("rejecting pattern size {}", size);
        return Err(DrillError::PatternTooSmall { size });
    }

    let row_bytes = (size + 1) * style.fill.len_utf8().max(style.mark.len_utf8());
    let mut out = String::with_capacity(size * row_bytes);

    for row in 0..size {
        let mirror = size - 1 - row;
        for col in 0..size {
            if col == row || col == mirror {
                out.push(style.mark);
            } else {
                out.push(style.fill);
            }
        }
        out.push('\n');
    }

    Ok(out)
}
