//! Core game types: cards, deck, board, RNG.
//!
//! These are the value types the engine's state machine is built from.
//! None of them know about game flow or scoring.

pub mod board;
pub mod card;
pub mod deck;
pub mod rng;

pub use board::{Board, BoardSnapshot, ClockPosition, Position, PositionView, TurnCursor, POSITION_COUNT};
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use rng::GameRng;
