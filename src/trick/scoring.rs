//! Trick scoring under trump rules.
//!
//! ```
//! use drill_kit::trick::trick_score;
//!
//! let trick = [("Jack", "Spades"), ("9", "Spades"), ("Ace", "Hearts"), ("7", "Clubs")];
//! assert_eq!(trick_score(trick, "Spades").unwrap(), 45);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{PlayingCard, Rank, Suit};
use crate::core::{DrillError, Result};

/// Number of cards in a trick.
pub const TRICK_SIZE: usize = 4;

/// Points per rank, indexed by `Rank::index()`: 7, 8, 9, 10, J, Q, K, A.
const TRUMP_POINTS: [u32; 8] = [0, 0, 14, 10, 20, 3, 4, 11];
const PLAIN_POINTS: [u32; 8] = [0, 0, 0, 10, 2, 3, 4, 11];

/// Point values for trump and non-trump cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    /// Points for a card of the trump suit, by rank index.
    pub trump: [u32; 8],

    /// Points for any other card, by rank index.
    pub plain: [u32; 8],
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            trump: TRUMP_POINTS,
            plain: PLAIN_POINTS,
        }
    }
}

impl ScoringTable {
    /// Override the trump value of one rank.
    #[must_use]
    pub fn with_trump_points(mut self, rank: Rank, points: u32) -> Self {
        self.trump[rank.index()] = points;
        self
    }

    /// Override the non-trump value of one rank.
    #[must_use]
    pub fn with_plain_points(mut self, rank: Rank, points: u32) -> Self {
        self.plain[rank.index()] = points;
        self
    }

    /// Value of `card` when `trump` is the trump suit.
    #[must_use]
    pub fn points(&self, card: PlayingCard, trump: Suit) -> u32 {
        if card.suit == trump {
            self.trump[card.rank.index()]
        } else {
            self.plain[card.rank.index()]
        }
    }
}

impl PlayingCard {
    /// Value of this card under the standard table.
    #[must_use]
    pub fn points(self, trump: Suit) -> u32 {
        ScoringTable::default().points(self, trump)
    }
}

/// Four distinct cards played in one round.
///
/// Deserializing goes through `Trick::new`, so the same checks apply.
/// Equality ignores card order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TrickCards")]
pub struct Trick {
    cards: [PlayingCard; TRICK_SIZE],
}

/// Unchecked wire form of a `Trick`.
#[derive(Deserialize)]
struct TrickCards {
    cards: Vec<PlayingCard>,
}

impl TryFrom<TrickCards> for Trick {
    type Error = DrillError;

    fn try_from(raw: TrickCards) -> Result<Self> {
        Trick::new(raw.cards.iter().map(|c| (c.rank.name(), c.suit.name())))
    }
}

impl PartialEq for Trick {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_cards() == other.sorted_cards()
    }
}

impl Eq for Trick {}

impl Trick {
    /// Build a trick from `(rank, suit)` names.
    ///
    /// Identical pairs collapse into one card before the size check, so
    /// four inputs with a repeat are rejected as a three-card trick.
    pub fn new<I, R, S>(cards: I) -> Result<Self>
    where
        I: IntoIterator<Item = (R, S)>,
        R: AsRef<str>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::with_capacity(TRICK_SIZE);
        for (rank, suit) in cards {
            let key = (rank.as_ref().to_owned(), suit.as_ref().to_owned());
            if seen.insert(key.clone()) {
                unique.push(key);
            }
        }

        if unique.len() != TRICK_SIZE {
            log::debug!("rejecting trick with {} distinct cards", unique.len());
            return Err(DrillError::TrickSize {
                expected: TRICK_SIZE,
                found: unique.len(),
            });
        }

        let parsed = unique
            .iter()
            .map(|(rank, suit)| PlayingCard::parse(rank, suit))
            .collect::<Result<Vec<_>>>()?;

        let cards: [PlayingCard; TRICK_SIZE] = parsed.try_into().map_err(|v: Vec<_>| {
            DrillError::TrickSize {
                expected: TRICK_SIZE,
                found: v.len(),
            }
        })?;

        Ok(Self { cards })
    }

    /// Cards in the order they were first seen.
    #[must_use]
    pub fn cards(&self) -> &[PlayingCard] {
        &self.cards
    }

    fn sorted_cards(&self) -> [PlayingCard; TRICK_SIZE] {
        let mut cards = self.cards;
        cards.sort_unstable();
        cards
    }

    /// Total points under the standard table.
    #[must_use]
    pub fn score(&self, trump: Suit) -> u32 {
        self.score_with(&ScoringTable::default(), trump)
    }

    /// Total points under a custom table.
    #[must_use]
    pub fn score_with(&self, table: &ScoringTable, trump: Suit) -> u32 {
        self.cards.iter().map(|&card| table.points(card, trump)).sum()
    }
}

/// Score four `(rank, suit)` cards with `trump_suit` as trump.
///
/// An unknown trump suit is reported before anything about the cards.
pub fn trick_score<I, R, S>(trick: I, trump_suit: &str) -> Result<u32>
where
    I: IntoIterator<Item = (R, S)>,
    R: AsRef<str>,
    S: AsRef<str>,
{
    let trump: Suit = trump_suit.parse().map_err(|_| {
        log::debug!("rejecting trump suit {:?}", trump_suit);
        DrillError::UnknownTrumpSuit(trump_suit.to_string())
    })?;

    let trick = Trick::new(trick)?;
    let total = trick.score(trump);
    log::debug!("trick {:?} scores {} with {} trump", trick.cards(), total, trump);
    Ok(total)
}
