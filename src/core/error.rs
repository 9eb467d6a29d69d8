//! Crate-wide error type.
//!
//! Every unit validates its input before doing any work and reports
//! problems through `DrillError`. Callers that only care about the broad
//! category can match on `DrillError::kind()`.

use thiserror::Error;

/// Broad category of a `DrillError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a structurally wrong argument (size, trump suit).
    InvalidArgument,
    /// An input value is outside the allowed set (cards, pieces).
    InvalidValue,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// Pattern side length must be greater than 2.
    #[error("pattern size must be greater than 2, got {size}")]
    PatternTooSmall { size: usize },

    /// Trump suit is not one of the four suits.
    #[error("invalid trump suit: {0}")]
    UnknownTrumpSuit(String),

    /// A trick must hold exactly four distinct cards.
    #[error("expected {expected} cards in trick, found {found}")]
    TrickSize { expected: usize, found: usize },

    /// Card suit is not one of the four suits.
    #[error("invalid suit: {0}")]
    UnknownSuit(String),

    /// Card rank is not in the 32-card deck.
    #[error("invalid rank: {0}")]
    UnknownRank(String),

    /// Piece count out of range for a card deck.
    #[error("expected between {min} and {max} pieces, found {found}")]
    PieceCount { found: usize, min: usize, max: usize },

    /// Two pieces share a shape or a colour.
    #[error("pieces are not unique: {attribute} {value:?} appears more than once")]
    DuplicatePiece { attribute: &'static str, value: String },
}

impl DrillError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DrillError::PatternTooSmall { .. } | DrillError::UnknownTrumpSuit(_) => {
                ErrorKind::InvalidArgument
            }
            DrillError::TrickSize { .. }
            | DrillError::UnknownSuit(_)
            | DrillError::UnknownRank(_)
            | DrillError::PieceCount { .. }
            | DrillError::DuplicatePiece { .. } => ErrorKind::InvalidValue,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DrillError>;
