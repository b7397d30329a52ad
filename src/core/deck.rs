//! The draw deck.
//!
//! A deck is an ordered card sequence with two mutations: drawing from the
//! front, and cards returning to the back when a clock position resolves.
//! `Deck::standard()` builds the full 52-card deck, one card per
//! (suit, rank) pair; shuffling is a uniform Fisher-Yates permutation via
//! `GameRng`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// Ordered draw pile. Front = next card to draw, back = where resolved
/// position stacks return.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard 52-card deck, unshuffled.
    ///
    /// Exactly one card per (suit, rank) combination, suits in deal order,
    /// ranks Ace..King within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Build a deck from an explicit card order (scripted games, replays).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffle in place with Fisher-Yates.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Draw the front card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Return a card to the back of the deck.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
