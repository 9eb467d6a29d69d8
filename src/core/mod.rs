//! Shared building blocks: the crate error type and the deck-shuffling RNG.

pub mod error;
pub mod rng;

pub use error::{DrillError, ErrorKind, Result};
pub use rng::DeckRng;
