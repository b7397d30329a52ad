//! Engine events for the presentation layer.
//!
//! Every engine command returns the events it produced, in order, so a
//! presentation layer can render placements, play sounds, or show dialogs
//! without the core knowing any of that exists. The event set is closed:
//! this game has exactly these six notifications.

use serde::{Deserialize, Serialize};

use crate::core::{Card, ClockPosition};

/// Notification emitted by a [`GameEngine`](crate::engine::GameEngine) command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began with a freshly dealt deck.
    GameStarted {
        /// Cards in the deck at start (always 52 for a standard game).
        remaining: usize,
    },

    /// A card was placed at a position.
    ///
    /// `matched` is true when the card's rank equals the position index;
    /// a matched placement is always followed by `PositionSolved`.
    CardPlaced {
        position: ClockPosition,
        card: Card,
        matched: bool,
    },

    /// A position's top card matched its index; the position is now
    /// permanently solved and its hidden stack returned to the deck.
    PositionSolved { position: ClockPosition },

    /// All 13 positions were solved before the deck ran out.
    GameWon,

    /// The deck ran out with at least one position unsolved.
    GameLost,

    /// The player abandoned the game; the score is untouched.
    GameStopped,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { remaining } => {
                write!(f, "game started ({} cards)", remaining)
            }
            GameEvent::CardPlaced {
                position,
                card,
                matched,
            } => write!(
                f,
                "{} placed at {}{}",
                card,
                position,
                if *matched { " (match)" } else { "" }
            ),
            GameEvent::PositionSolved { position } => write!(f, "{} solved", position),
            GameEvent::GameWon => write!(f, "game won"),
            GameEvent::GameLost => write!(f, "game lost"),
            GameEvent::GameStopped => write!(f, "game stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_event_display() {
        let pos = ClockPosition::new(5).unwrap();
        let event = GameEvent::CardPlaced {
            position: pos,
            card: Card::new(Suit::Spades, Rank::Five),
            matched: true,
        };

        assert_eq!(format!("{}", event), "Five of Spades placed at Position 5 (match)");
        assert_eq!(format!("{}", GameEvent::GameWon), "game won");
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = GameEvent::PositionSolved {
            position: ClockPosition::new(13).unwrap(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
