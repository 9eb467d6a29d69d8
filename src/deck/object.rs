//! Wooden game pieces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An object with a shape and a colour.
///
/// Two objects are interchangeable when both their shape and colour match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameObject {
    shape: String,
    colour: String,
}

impl GameObject {
    #[must_use]
    pub fn new(shape: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            colour: colour.into(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> &str {
        &self.shape
    }

    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// True if the two objects differ in both shape and colour.
    #[must_use]
    pub fn is_disjoint_from(&self, other: &GameObject) -> bool {
        self.shape != other.shape && self.colour != other.colour
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.shape, self.colour)
    }
}
