//! Card model: suits, ranks, and the card value type.
//!
//! Cards are immutable values. Identity is structural: two cards are equal
//! exactly when they share suit and rank, and a standard deck contains every
//! (suit, rank) pair once.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    /// All four suits, in deal order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", name)
    }
}

/// Card rank, Ace through King.
///
/// Each rank maps to a numeric value in [1, 13]; the mapping is injective
/// and drives clock-position matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value of this rank: Ace = 1 .. King = 13.
    #[must_use]
    pub const fn numeric_value(self) -> u8 {
        self as u8 + 1
    }

    /// Rank for a numeric value in [1, 13].
    #[must_use]
    pub const fn from_numeric(value: u8) -> Option<Rank> {
        if value >= 1 && value <= 13 {
            Some(Rank::ALL[(value - 1) as usize])
        } else {
            None
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Numeric value of the card's rank, in [1, 13].
    #[must_use]
    pub const fn numeric_value(self) -> u8 {
        self.rank.numeric_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_numeric_values() {
        assert_eq!(Rank::Ace.numeric_value(), 1);
        assert_eq!(Rank::Seven.numeric_value(), 7);
        assert_eq!(Rank::Jack.numeric_value(), 11);
        assert_eq!(Rank::Queen.numeric_value(), 12);
        assert_eq!(Rank::King.numeric_value(), 13);
    }

    #[test]
    fn test_numeric_value_injective() {
        let values: HashSet<u8> = Rank::ALL.iter().map(|r| r.numeric_value()).collect();
        assert_eq!(values.len(), 13);
        assert!(values.iter().all(|&v| (1..=13).contains(&v)));
    }

    #[test]
    fn test_from_numeric_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_numeric(rank.numeric_value()), Some(rank));
        }
        assert_eq!(Rank::from_numeric(0), None);
        assert_eq!(Rank::from_numeric(14), None);
    }

    #[test]
    fn test_card_equality_is_structural() {
        let a = Card::new(Suit::Hearts, Rank::Ace);
        let b = Card::new(Suit::Hearts, Rank::Ace);
        let c = Card::new(Suit::Spades, Rank::Ace);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Suit::Diamonds, Rank::Queen);
        assert_eq!(format!("{}", card), "Queen of Diamonds");
    }
}
