//! Deck generation from a set of pieces.
//!
//! ## Algorithm
//!
//! 1. Build every card `((s1, c1), (s2, c2))` with `s1 != s2` and
//!    `c1 != c2`, walking shapes and colours in piece order.
//! 2. Keep cards whose two objects differ in shape and colour, subject
//!    to the chosen `PieceFilter`.
//! 3. Drop reversed duplicates, keeping the first occurrence.
//!
//! For `n` pieces the default deck holds `(n(n-1))^2 / 2` cards.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::card::GameCard;
use super::object::GameObject;
use super::rules::{PieceFilter, PieceMembership};
use crate::core::{DeckRng, DrillError, Result};

/// Fewest pieces a deck can be built from.
pub const MIN_PIECES: usize = 3;

/// Most pieces a deck can be built from.
pub const MAX_PIECES: usize = 5;

/// A validated set of pieces from which cards are generated.
///
/// ## Example
///
/// ```
/// use drill_kit::deck::{CardDeck, GameObject};
///
/// let deck = CardDeck::new([
///     GameObject::new("Circle", "Red"),
///     GameObject::new("Square", "Blue"),
///     GameObject::new("Triangle", "Green"),
/// ])
/// .unwrap();
///
/// let cards = deck.generate_deck();
/// assert_eq!(cards.len(), 18);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDeck {
    pieces: SmallVec<[GameObject; MAX_PIECES]>,
}

impl CardDeck {
    /// Validate and store the pieces.
    ///
    /// Fails if there are fewer than 3 or more than 5 pieces, or if two
    /// pieces share a shape or a colour.
    pub fn new(pieces: impl IntoIterator<Item = GameObject>) -> Result<Self> {
        let pieces: SmallVec<[GameObject; MAX_PIECES]> = pieces.into_iter().collect();

        if !(MIN_PIECES..=MAX_PIECES).contains(&pieces.len()) {
            log::debug!("rejecting deck with {} pieces", pieces.len());
            return Err(DrillError::PieceCount {
                found: pieces.len(),
                min: MIN_PIECES,
                max: MAX_PIECES,
            });
        }

        for (i, a) in pieces.iter().enumerate() {
            for b in &pieces[i + 1..] {
                let duplicate = if a.shape() == b.shape() {
                    Some(("shape", a.shape()))
                } else if a.colour() == b.colour() {
                    Some(("colour", a.colour()))
                } else {
                    None
                };
                if let Some((attribute, value)) = duplicate {
                    log::debug!("rejecting deck: {} {:?} repeated", attribute, value);
                    return Err(DrillError::DuplicatePiece {
                        attribute,
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(Self { pieces })
    }

    /// Pieces in the order given to `new`.
    #[must_use]
    pub fn pieces(&self) -> &[GameObject] {
        &self.pieces
    }

    /// True if `object` is one of the registered pieces.
    #[must_use]
    pub fn contains(&self, object: &GameObject) -> bool {
        self.pieces.contains(object)
    }

    /// How many of the card's objects are registered pieces.
    #[must_use]
    pub fn membership(&self, card: &GameCard) -> PieceMembership {
        let count = card.objects().iter().filter(|o| self.contains(o)).count();
        PieceMembership::from_count(count)
    }

    /// Generate every valid card, without reversed duplicates.
    ///
    /// Piece membership plays no part in validity here; see
    /// `generate_deck_with` for the stricter variant.
    #[must_use]
    pub fn generate_deck(&self) -> Vec<GameCard> {
        self.generate_deck_with(PieceFilter::Any)
    }

    /// Generate every valid card passing `filter`.
    #[must_use]
    pub fn generate_deck_with(&self, filter: PieceFilter) -> Vec<GameCard> {
        let candidates = self.all_possible_cards();
        let candidate_count = candidates.len();

        let mut seen: FxHashSet<(GameObject, GameObject)> = FxHashSet::default();
        let mut deck = Vec::with_capacity(candidate_count / 2);
        let mut valid_count = 0;

        for card in candidates {
            if !self.is_valid(&card, filter) {
                continue;
            }
            valid_count += 1;

            let (a, b) = card.canonical();
            if seen.insert((a.clone(), b.clone())) {
                deck.push(card);
            } else {
                log::trace!("skipping reversed duplicate {}", card);
            }
        }

        log::debug!(
            "generated {} cards from {} pieces ({} candidates, {} valid, filter {:?})",
            deck.len(),
            self.pieces.len(),
            candidate_count,
            valid_count,
            filter
        );
        deck
    }

    /// The generated deck in a seeded random order.
    #[must_use]
    pub fn shuffled_deck(&self, seed: u64) -> Vec<GameCard> {
        let mut deck = self.generate_deck();
        DeckRng::new(seed).shuffle(&mut deck);
        deck
    }

    fn is_valid(&self, card: &GameCard, filter: PieceFilter) -> bool {
        card.first().is_disjoint_from(card.second()) && filter.allows(self.membership(card))
    }

    fn all_possible_cards(&self) -> Vec<GameCard> {
        let shapes: SmallVec<[&str; MAX_PIECES]> = self.pieces.iter().map(|p| p.shape()).collect();
        let colours: SmallVec<[&str; MAX_PIECES]> =
            self.pieces.iter().map(|p| p.colour()).collect();

        let ordered_pairs = self.pieces.len() * (self.pieces.len() - 1);
        let mut cards = Vec::with_capacity(ordered_pairs * ordered_pairs);

        for &s1 in &shapes {
            for &s2 in &shapes {
                if s1 == s2 {
                    continue;
                }
                for &c1 in &colours {
                    for &c2 in &colours {
                        if c1 == c2 {
                            continue;
                        }
                        cards.push(GameCard::new(
                            GameObject::new(s1, c1),
                            GameObject::new(s2, c2),
                        ));
                    }
                }
            }
        }
        cards
    }
}
