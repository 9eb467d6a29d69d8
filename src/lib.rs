//! # drill-kit
//!
//! Five small, independent algorithm units. None depends on another.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation takes values and returns values. No I/O,
//!    no global state, no caching.
//!
//! 2. **Validate First**: bad input is rejected with a `DrillError` before
//!    any work is done.
//!
//! ## Modules
//!
//! - `core`: Error type and the seeded RNG used for dealing decks
//! - `pattern`: ASCII "X" patterns
//! - `morphology`: Shrink/expand/denoise on binary signals
//! - `trick`: Trick scoring under trump rules
//! - `palindrome`: Longest palindromic numbers in a digit string
//! - `deck`: Two-object card generation for a matching game

pub mod core;
pub mod pattern;
pub mod morphology;
pub mod trick;
pub mod palindrome;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{DeckRng, DrillError, ErrorKind, Result};

pub use crate::pattern::{string_pattern, string_pattern_with, PatternStyle};

pub use crate::morphology::{denoise, expand, shrink};

pub use crate::trick::{trick_score, PlayingCard, Rank, ScoringTable, Suit, Trick};

pub use crate::palindrome::{is_palindrome, longest_palindromic_numbers};

pub use crate::deck::{CardDeck, GameCard, GameObject, PieceFilter, PieceMembership};
