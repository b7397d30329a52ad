//! Engine error types.
//!
//! All engine failures are caller errors: an operation was invoked from a
//! state that forbids it, during an unacknowledged placement, or against an
//! empty deck. None are retryable and none are swallowed - rejected calls
//! leave the deck, board, and score untouched.

use super::GamePhase;

/// Error returned by a rejected engine command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Operation invoked from a phase that forbids it.
    InvalidState {
        operation: &'static str,
        phase: GamePhase,
    },

    /// Draw attempted with no cards left. Unreachable when callers respect
    /// the loss condition after every placement, but signaled rather than
    /// silently ignored.
    EmptyDeck,

    /// A placement is still pending acknowledgement via
    /// [`placement_complete`](crate::engine::GameEngine::placement_complete).
    Busy,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidState { operation, phase } => {
                write!(f, "{} is not valid while {}", operation, phase)
            }
            EngineError::EmptyDeck => write!(f, "the deck has run out of cards"),
            EngineError::Busy => write!(f, "previous placement has not been acknowledged"),
        }
    }
}

impl std::error::Error for EngineError {}
