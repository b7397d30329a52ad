//! The game engine: a synchronous finite-state machine over deck, board,
//! and score.
//!
//! ## Phases
//!
//! `Idle` -> `InProgress` -> back to `Idle`. Win and loss are instantaneous:
//! they are observed through the [`GameEvent::GameWon`] / [`GameEvent::GameLost`]
//! events returned by the final [`draw_and_place`](GameEngine::draw_and_place),
//! after which the engine has already reset to `Idle`.
//!
//! ## Re-entrancy guard
//!
//! The presentation layer may defer applying a placement behind an animation.
//! While it does, it must not draw again: `draw_and_place` sets a `busy` flag
//! and rejects further draws until the caller acknowledges the placement via
//! [`placement_complete`](GameEngine::placement_complete). This is a
//! cooperative, caller-driven lock; the engine itself is single-threaded and
//! strictly synchronous.

pub mod error;
pub mod event;

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardSnapshot, ClockPosition, Deck, GameRng, TurnCursor};
use crate::storage::{ScoreRecord, ScoreStore};

pub use error::EngineError;
pub use event::GameEvent;

/// Engine phase. Terminal win/loss states are instantaneous and never
/// observable here; see the module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active game.
    Idle,
    /// Deck dealt, not all positions solved.
    InProgress,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Idle => write!(f, "idle"),
            GamePhase::InProgress => write!(f, "in progress"),
        }
    }
}

/// Clock solitaire state machine.
///
/// Owns the deck, the 13-position board, the turn cursor, and the aggregate
/// score. The score store collaborator is called once at construction
/// (`load`), after every win or loss (`save`), and from
/// [`reset_progress`](GameEngine::reset_progress) (`clear`); store failures
/// are logged and never block gameplay.
pub struct GameEngine {
    phase: GamePhase,
    deck: Deck,
    board: Board,
    cursor: TurnCursor,
    busy: bool,
    score: ScoreRecord,
    store: Box<dyn ScoreStore>,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine with an OS-seeded RNG, loading the score from the
    /// store. A failed load starts from a zero score.
    #[must_use]
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Self::with_rng(store, GameRng::from_entropy())
    }

    /// Create an engine with an explicit RNG for deterministic shuffles.
    #[must_use]
    pub fn with_rng(mut store: Box<dyn ScoreStore>, rng: GameRng) -> Self {
        let score = match store.load() {
            Ok(score) => score,
            Err(err) => {
                log::warn!("score load failed, starting from zero: {}", err);
                ScoreRecord::default()
            }
        };

        Self {
            phase: GamePhase::Idle,
            deck: Deck::new(),
            board: Board::new(),
            cursor: TurnCursor::new(),
            busy: false,
            score,
            store,
            rng,
        }
    }

    // === Commands ===

    /// Start a new game with a freshly shuffled standard deck.
    ///
    /// Valid only while `Idle`.
    pub fn start_game(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.start_with_deck(deck)
    }

    /// Start a new game with a caller-supplied deck order.
    ///
    /// Used for scripted games and replays; `start_game` is this with a
    /// shuffled standard deck. Valid only while `Idle`.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(GamePhase::Idle, "start_game")?;

        self.deck = deck;
        self.board.reset();
        self.cursor.reset();
        self.busy = false;
        self.phase = GamePhase::InProgress;

        Ok(vec![GameEvent::GameStarted {
            remaining: self.deck.len(),
        }])
    }

    /// Draw the next card and place it at the current clock position.
    ///
    /// Valid only while `InProgress` and not busy. On success the busy flag
    /// is set; the caller clears it with
    /// [`placement_complete`](Self::placement_complete) once its animation
    /// finishes. Rejected calls leave deck and board untouched.
    ///
    /// The returned events end with [`GameEvent::GameWon`] or
    /// [`GameEvent::GameLost`] when this placement ended the game, in which
    /// case the engine is `Idle` again and the score has been persisted.
    pub fn draw_and_place(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(GamePhase::InProgress, "draw_and_place")?;
        if self.busy {
            return Err(EngineError::Busy);
        }
        if self.deck.is_empty() {
            // Unreachable when callers respect the loss condition, checked
            // before the cursor moves so rejection stays non-mutating.
            return Err(EngineError::EmptyDeck);
        }

        let position = self.cursor.advance(&self.board);
        let card = self.deck.draw().ok_or(EngineError::EmptyDeck)?;

        // The cursor never lands on a solved position; the re-check mirrors
        // the match rule exactly.
        let matched =
            card.numeric_value() == position.get() && !self.board.is_solved(position);

        let mut events = Vec::with_capacity(3);
        if matched {
            for returned in self.board.place_match(position, card) {
                self.deck.put_back(returned);
            }
            events.push(GameEvent::CardPlaced {
                position,
                card,
                matched: true,
            });
            events.push(GameEvent::PositionSolved { position });
        } else {
            self.board.place_miss(position, card);
            events.push(GameEvent::CardPlaced {
                position,
                card,
                matched: false,
            });
        }

        self.busy = true;

        // End conditions, win checked first: a final matching draw can both
        // solve the last position and empty the deck.
        if self.board.all_solved() {
            self.finish_win();
            events.push(GameEvent::GameWon);
        } else if self.deck.is_empty() {
            self.finish_loss();
            events.push(GameEvent::GameLost);
        }

        Ok(events)
    }

    /// Acknowledge the most recent placement, clearing the busy flag.
    ///
    /// Idempotent; safe to call in any phase.
    pub fn placement_complete(&mut self) {
        self.busy = false;
    }

    /// Abandon the current game without touching the score.
    ///
    /// Valid only while `InProgress`.
    pub fn stop_game(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(GamePhase::InProgress, "stop_game")?;

        self.reset_table();
        self.phase = GamePhase::Idle;

        Ok(vec![GameEvent::GameStopped])
    }

    /// Zero the score and clear the store.
    ///
    /// Valid in any phase; a failed clear is logged and the in-memory score
    /// is zeroed regardless.
    pub fn reset_progress(&mut self) {
        self.score = ScoreRecord::default();
        if let Err(err) = self.store.clear() {
            log::warn!("score clear failed: {}", err);
        }
    }

    // === Queries ===

    /// Current engine phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether a placement is pending acknowledgement.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.deck.len()
    }

    /// Aggregate score across games.
    #[must_use]
    pub fn score(&self) -> ScoreRecord {
        self.score
    }

    /// Position of the most recent placement, or `None` before the first
    /// draw of a game.
    #[must_use]
    pub fn current_position(&self) -> Option<ClockPosition> {
        self.cursor.position()
    }

    /// Read-only view of all 13 positions for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    // === Internals ===

    fn require_phase(
        &self,
        expected: GamePhase,
        operation: &'static str,
    ) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                operation,
                phase: self.phase,
            })
        }
    }

    fn finish_win(&mut self) {
        self.score.wins += 1;
        self.score.games_played += 1;
        self.persist_score();
        self.reset_table();
        self.phase = GamePhase::Idle;
    }

    fn finish_loss(&mut self) {
        self.score.games_played += 1;
        self.persist_score();
        self.reset_table();
        self.phase = GamePhase::Idle;
    }

    fn persist_score(&mut self) {
        if let Err(err) = self.store.save(&self.score) {
            log::warn!("score save failed, continuing: {}", err);
        }
    }

    fn reset_table(&mut self) {
        self.deck = Deck::new();
        self.board.reset();
        self.cursor.reset();
        self.busy = false;
    }
}
