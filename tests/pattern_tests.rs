//! Pattern printer tests.

use drill_kit::pattern::{string_pattern, string_pattern_with, PatternStyle};
use drill_kit::{DrillError, ErrorKind};
use proptest::prelude::*;

/// Sizes up to 2 are rejected.
#[test]
fn test_rejects_small_sizes() {
    assert_eq!(
        string_pattern(2).unwrap_err(),
        DrillError::PatternTooSmall { size: 2 }
    );
    assert_eq!(string_pattern(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

/// The output ends with a newline after the last row.
#[test]
fn test_trailing_newline() {
    let out = string_pattern(6).unwrap();
    assert!(out.ends_with("+\n"));
    assert_eq!(out.matches('\n').count(), 6);
}

/// Custom styles draw the same shape.
#[test]
fn test_styled_matches_default_shape() {
    let style = PatternStyle::default().with_mark('x').with_fill('.');
    let styled = string_pattern_with(7, &style).unwrap();
    let plain = string_pattern(7).unwrap();
    assert_eq!(styled.replace('x', "+").replace('.', "-"), plain);
}

proptest! {
    #[test]
    fn prop_rows_mark_both_diagonals(size in 3usize..40) {
        let out = string_pattern(size).unwrap();
        let rows: Vec<&str> = out.lines().collect();
        prop_assert_eq!(rows.len(), size);
        prop_assert_eq!(out.len(), size * (size + 1));

        for (r, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.len(), size);
            for (c, ch) in row.chars().enumerate() {
                let on_diagonal = c == r || c == size - 1 - r;
                prop_assert_eq!(ch, if on_diagonal { '+' } else { '-' });
            }
        }
    }
}
