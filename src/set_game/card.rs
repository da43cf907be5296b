//! Set cards and deck generation.
//!
//! Each card has four attributes, each drawn from three values. The deck
//! is every combination exactly once: 3^4 = 81 cards.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 81;

/// Shape drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Diamond,
    Rectangle,
    Oval,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::Diamond, Symbol::Rectangle, Symbol::Oval];
}

/// Ink color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

/// How many symbols are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Number {
    pub const ALL: [Number; 3] = [Number::One, Number::Two, Number::Three];

    /// Symbol count as an integer.
    #[must_use]
    pub const fn count(self) -> usize {
        self as usize
    }
}

/// Fill style of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];
}

/// A card of the Set game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCard {
    pub id: Uuid,
    pub symbol: Symbol,
    pub color: Color,
    pub number: Number,
    pub shading: Shading,
    /// Part of the current selection.
    pub is_selected: bool,
    /// Part of a found set.
    pub is_matched: bool,
}

impl SetCard {
    /// Create an unselected, unmatched card.
    #[must_use]
    pub fn new(id: Uuid, symbol: Symbol, color: Color, number: Number, shading: Shading) -> Self {
        Self {
            id,
            symbol,
            color,
            number,
            shading,
            is_selected: false,
            is_matched: false,
        }
    }

    /// The four attributes, for comparisons that ignore id and flags.
    #[must_use]
    pub fn attributes(&self) -> (Symbol, Color, Number, Shading) {
        (self.symbol, self.color, self.number, self.shading)
    }
}

impl fmt::Display for SetCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:?} {:?} {} {:?}",
            self.id,
            self.symbol,
            self.color,
            self.number.count(),
            self.shading
        )
    }
}

/// Build all 81 cards and shuffle them.
///
/// Card ids come from `rng`, so the same seed yields the same deck.
pub fn generate_deck(rng: &mut GameRng) -> Vec<SetCard> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for symbol in Symbol::ALL {
        for color in Color::ALL {
            for number in Number::ALL {
                for shading in Shading::ALL {
                    let id = uuid::Builder::from_random_bytes(rng.uuid_bytes()).into_uuid();
                    deck.push(SetCard::new(id, symbol, color, number, shading));
                }
            }
        }
    }

    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn test_deck_has_every_combination_once() {
        let deck = generate_deck(&mut GameRng::new(42));
        assert_eq!(deck.len(), DECK_SIZE);

        let combos: FxHashSet<_> = deck.iter().map(SetCard::attributes).collect();
        assert_eq!(combos.len(), DECK_SIZE);

        let ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_is_deterministic() {
        let a = generate_deck(&mut GameRng::new(5));
        let b = generate_deck(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fresh_cards_are_clear() {
        let deck = generate_deck(&mut GameRng::new(1));
        assert!(deck.iter().all(|c| !c.is_selected && !c.is_matched));
    }

    #[test]
    fn test_number_count() {
        assert_eq!(Number::One.count(), 1);
        assert_eq!(Number::Three.count(), 3);
    }

    #[test]
    fn test_card_serde() {
        let card = generate_deck(&mut GameRng::new(2)).remove(0);
        let json = serde_json::to_string(&card).unwrap();
        let back: SetCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
