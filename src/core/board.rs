//! The clock board: 13 positions, their hidden stacks, and the turn cursor.
//!
//! Positions are indexed 1..=12 for the clock hours plus 13 for the King
//! slot. Each position holds an optional visible top card, a hidden stack of
//! previously-placed misses, and a `solved` flag that is monotonic for the
//! duration of a game.
//!
//! Card conservation: the board never discards a card. Misses accumulate in
//! the hidden stack; when a position resolves, `place_match` hands every
//! previously-placed card back so the engine can return them to the deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};

/// Number of positions on the clock board.
pub const POSITION_COUNT: usize = 13;

/// Validated clock position, 1..=12 for the hours plus 13 for the King slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockPosition(u8);

impl ClockPosition {
    /// Create a position from a 1-based index. Returns `None` outside 1..=13.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= POSITION_COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The position a rank belongs to (Ace = 1 .. King = 13).
    #[must_use]
    pub const fn from_rank(rank: Rank) -> Self {
        Self(rank.numeric_value())
    }

    /// 1-based index of this position.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based array index.
    #[must_use]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all 13 positions in clock order.
    pub fn all() -> impl Iterator<Item = ClockPosition> {
        (1..=POSITION_COUNT as u8).map(ClockPosition)
    }
}

impl std::fmt::Display for ClockPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position {}", self.0)
    }
}

/// One clock position: visible top card, hidden misses, solved flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Currently visible card, if any has been placed.
    pub top: Option<Card>,

    /// Misses placed here before the position resolved, oldest first.
    /// Empty whenever `solved` is true.
    pub hidden: SmallVec<[Card; 8]>,

    /// True once the top card's rank matched this position's index.
    /// Never reverts within a game.
    pub solved: bool,
}

impl Position {
    /// Cards currently held at this position (top plus hidden).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hidden.len() + usize::from(self.top.is_some())
    }
}

/// Read-only view of one position for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionView {
    pub position: ClockPosition,
    pub top: Option<Card>,
    pub hidden_count: usize,
    pub solved: bool,
}

/// Read-only view of the whole board.
pub type BoardSnapshot = Vec<PositionView>;

/// The 13-position clock board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    positions: [Position; POSITION_COUNT],
}

impl Board {
    /// Create an empty, unsolved board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every position to empty and unsolved.
    pub fn reset(&mut self) {
        for pos in &mut self.positions {
            *pos = Position::default();
        }
    }

    /// Borrow a position.
    #[must_use]
    pub fn position(&self, pos: ClockPosition) -> &Position {
        &self.positions[pos.slot()]
    }

    /// Whether a position is solved.
    #[must_use]
    pub fn is_solved(&self, pos: ClockPosition) -> bool {
        self.positions[pos.slot()].solved
    }

    /// Number of solved positions.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.positions.iter().filter(|p| p.solved).count()
    }

    /// True once all 13 positions are solved.
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.positions.iter().all(|p| p.solved)
    }

    /// Total cards currently held across the board (tops plus hidden stacks).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.positions.iter().map(Position::card_count).sum()
    }

    /// Place a non-matching card: the previous top (if any) goes onto the
    /// hidden stack, the drawn card becomes the visible top.
    pub fn place_miss(&mut self, pos: ClockPosition, card: Card) {
        let position = &mut self.positions[pos.slot()];
        debug_assert!(!position.solved, "miss placed on a solved position");

        if let Some(previous) = position.top.replace(card) {
            position.hidden.push(previous);
        }
    }

    /// Place a matching card: mark the position solved and return every
    /// previously-placed card, in placement order (hidden stack oldest-first,
    /// then the replaced top), for return to the deck.
    pub fn place_match(&mut self, pos: ClockPosition, card: Card) -> Vec<Card> {
        let position = &mut self.positions[pos.slot()];
        debug_assert!(!position.solved, "match placed on a solved position");

        let mut returned: Vec<Card> = position.hidden.drain(..).collect();
        if let Some(previous) = position.top.replace(card) {
            returned.push(previous);
        }
        position.solved = true;
        returned
    }

    /// Snapshot of every position for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        ClockPosition::all()
            .map(|pos| {
                let p = self.position(pos);
                PositionView {
                    position: pos,
                    top: p.top,
                    hidden_count: p.hidden.len(),
                    solved: p.solved,
                }
            })
            .collect()
    }
}

/// Cursor over the clock positions.
///
/// Starts at 0 (before the first draw); each advance steps to the next
/// position, wrapping 13 -> 1 and skipping solved positions. Must not be
/// advanced when all 13 positions are solved - the win condition ends the
/// game before that can happen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    current: u8,
}

impl TurnCursor {
    /// Cursor at the pre-game position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the pre-game position.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// The position of the most recent advance, or `None` before the first.
    #[must_use]
    pub fn position(&self) -> Option<ClockPosition> {
        ClockPosition::new(self.current)
    }

    /// Step to the next unsolved position, wrapping 13 -> 1.
    pub fn advance(&mut self, board: &Board) -> ClockPosition {
        debug_assert!(!board.all_solved(), "cursor advanced with all positions solved");

        loop {
            self.current = if self.current >= POSITION_COUNT as u8 {
                1
            } else {
                self.current + 1
            };
            let pos = ClockPosition(self.current);
            if !board.is_solved(pos) {
                return pos;
            }
        }
    }
}
