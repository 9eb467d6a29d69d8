//! Point-trick scoring for the 32-card deck (7 through ace, four suits).
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `PlayingCard`: parsed card values
//! - `Trick`: four distinct cards
//! - `ScoringTable`: trump and non-trump point values per rank

pub mod card;
pub mod scoring;

pub use card::{PlayingCard, Rank, Suit};
pub use scoring::{trick_score, ScoringTable, Trick, TRICK_SIZE};
