//! Card selection rules for deck generation.

use serde::{Deserialize, Serialize};

/// How many of a card's two objects are registered pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceMembership {
    /// Neither object is a piece.
    None,
    /// Exactly one object is a piece.
    One,
    /// Both objects are pieces.
    Both,
}

impl PieceMembership {
    /// Membership for a count of matching objects (0, 1 or 2).
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => PieceMembership::None,
            1 => PieceMembership::One,
            _ => PieceMembership::Both,
        }
    }
}

/// Extra filter applied on top of the shape/colour validity check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceFilter {
    /// Piece membership does not affect validity.
    #[default]
    Any,
    /// Drop cards that show two registered pieces.
    AtMostOnePiece,
}

impl PieceFilter {
    /// True if a card with this membership passes the filter.
    #[must_use]
    pub const fn allows(self, membership: PieceMembership) -> bool {
        match self {
            PieceFilter::Any => true,
            PieceFilter::AtMostOnePiece => !matches!(membership, PieceMembership::Both),
        }
    }
}
