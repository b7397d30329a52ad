//! # clock-solitaire
//!
//! A clock solitaire engine: 52 cards dealt over 13 clock positions, the
//! player draws the top card of a shuffled deck and places it at the
//! position the turn cursor indicates. A card whose rank matches the
//! position solves it permanently; a miss stacks face-down beneath the
//! visible card. Solve all 13 positions before the deck runs out to win.
//!
//! ## Design Principles
//!
//! 1. **One state machine**: all mutable game state lives in a single
//!    [`GameEngine`] with an explicit construction/reset lifecycle; no
//!    ambient globals.
//!
//! 2. **UI-agnostic**: the engine knows nothing about rendering, animation,
//!    or audio. Commands return [`GameEvent`]s synchronously; a presentation
//!    layer consumes them and queries snapshots to draw.
//!
//! 3. **Deterministic shuffles**: [`GameRng`] is ChaCha8 seeded from a
//!    `u64`, so any game is replayable from its seed, and the shuffle is
//!    unbiased Fisher-Yates.
//!
//! 4. **Card conservation**: deck + hidden stacks + visible tops always sum
//!    to 52 during a game. Cards placed at a position return to the back of
//!    the deck the moment the position solves.
//!
//! ## Modules
//!
//! - `core`: cards, deck, board, turn cursor, RNG
//! - `engine`: the game state machine, its events and errors
//! - `storage`: the score persistence trait and bundled stores

pub mod core;
pub mod engine;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSnapshot, Card, ClockPosition, Deck, GameRng, PositionView, Rank, Suit,
    TurnCursor, POSITION_COUNT,
};

pub use crate::engine::{EngineError, GameEngine, GameEvent, GamePhase};

pub use crate::storage::{JsonFileStore, MemoryStore, ScoreRecord, ScoreStore, StoreError};
