//! Two-object cards.
//!
//! A card shows two objects with no meaningful order, so equality and
//! hashing both treat the pair as unordered.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::object::GameObject;

/// A card showing two objects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameCard {
    objects: [GameObject; 2],
}

impl GameCard {
    #[must_use]
    pub fn new(first: GameObject, second: GameObject) -> Self {
        Self {
            objects: [first, second],
        }
    }

    /// Objects in the order the card was built with.
    #[must_use]
    pub fn objects(&self) -> &[GameObject; 2] {
        &self.objects
    }

    #[must_use]
    pub fn first(&self) -> &GameObject {
        &self.objects[0]
    }

    #[must_use]
    pub fn second(&self) -> &GameObject {
        &self.objects[1]
    }

    /// True if `object` is printed on this card.
    #[must_use]
    pub fn contains(&self, object: &GameObject) -> bool {
        self.objects.contains(object)
    }

    /// The two objects sorted, identical for a card and its reverse.
    #[must_use]
    pub fn canonical(&self) -> (&GameObject, &GameObject) {
        let [a, b] = &self.objects;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// True if `other` holds the same objects in swapped positions.
    #[must_use]
    pub fn is_reverse_of(&self, other: &GameCard) -> bool {
        self.objects[0] == other.objects[1] && self.objects[1] == other.objects[0]
    }

    /// The same card with its objects swapped.
    #[must_use]
    pub fn reversed(&self) -> GameCard {
        let [a, b] = self.objects.clone();
        GameCard::new(b, a)
    }
}

impl PartialEq for GameCard {
    fn eq(&self, other: &Self) -> bool {
        self.objects == other.objects || self.is_reverse_of(other)
    }
}

impl Eq for GameCard {}

impl Hash for GameCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for GameCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.objects[0], self.objects[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn red_circle() -> GameObject {
        GameObject::new("Circle", "Red")
    }

    fn blue_square() -> GameObject {
        GameObject::new("Square", "Blue")
    }

    #[test]
    fn test_order_independent_equality() {
        let ab = GameCard::new(red_circle(), blue_square());
        let ba = GameCard::new(blue_square(), red_circle());
        assert_eq!(ab, ba);
        assert_eq!(ba, ab);
        assert!(ab.is_reverse_of(&ba));
        assert!(!ab.is_reverse_of(&ab));
    }

    #[test]
    fn test_repeated_object_is_not_equal_to_mixed_card() {
        let aa = GameCard::new(red_circle(), red_circle());
        let ab = GameCard::new(red_circle(), blue_square());
        assert_ne!(aa, ab);
        assert_ne!(ab, aa);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = FxHashSet::default();
        set.insert(GameCard::new(red_circle(), blue_square()));
        assert!(set.contains(&GameCard::new(blue_square(), red_circle())));
        assert!(!set.insert(GameCard::new(blue_square(), red_circle())));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_canonical_and_reversed() {
        let card = GameCard::new(blue_square(), red_circle());
        assert_eq!(card.canonical(), card.reversed().canonical());
        assert_eq!(card.reversed().first(), &red_circle());
        assert!(card.contains(&blue_square()));
        assert!(!card.contains(&GameObject::new("Square", "Red")));
    }

    #[test]
    fn test_display() {
        let card = GameCard::new(red_circle(), blue_square());
        assert_eq!(card.to_string(), "<(Circle, Red), (Square, Blue)>");
    }
}
