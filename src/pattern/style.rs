//! Characters used to draw a pattern.

use serde::{Deserialize, Serialize};

/// Drawing characters for `string_pattern_with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStyle {
    /// Character placed on both diagonals.
    pub mark: char,

    /// Character for every other cell.
    pub fill: char,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self { mark: '+', fill: '-' }
    }
}

impl PatternStyle {
    /// Set the diagonal character.
    #[must_use]
    pub fn with_mark(mut self, mark: char) -> Self {
        self.mark = mark;
        self
    }

    /// Set the background character.
    #[must_use]
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }
}
