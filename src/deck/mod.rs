//! Card deck generation for a shape-and-colour matching game.
//!
//! ## Key Types
//!
//! - `GameObject`: a piece, identified by shape and colour
//! - `GameCard`: two objects, compared as an unordered pair
//! - `CardDeck`: 3-5 pieces with distinct shapes and colours
//! - `PieceFilter`: optional restriction on how many pieces a card may show
//!
//! ## Validity
//!
//! A generated card is valid when its two objects differ in both shape
//! and colour. Whether the objects are registered pieces is reported by
//! `CardDeck::membership` but ignored unless a stricter `PieceFilter` is
//! requested.

pub mod card;
pub mod generator;
pub mod object;
pub mod rules;

pub use card::GameCard;
pub use generator::{CardDeck, MAX_PIECES, MIN_PIECES};
pub use object::GameObject;
pub use rules::{PieceFilter, PieceMembership};
