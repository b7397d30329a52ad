//! Score persistence.
//!
//! Only two counters survive across games: wins and games played. The engine
//! talks to a [`ScoreStore`] collaborator for them; the medium behind it is
//! not the engine's concern. Two stores ship with the crate:
//!
//! - [`MemoryStore`]: in-process, for tests and headless runs.
//! - [`JsonFileStore`]: a small JSON document on disk.
//!
//! The engine treats every store call as best-effort: a failed save or clear
//! is logged and gameplay continues.

pub mod json;
pub mod memory;

use serde::{Deserialize, Serialize};

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Aggregate score across games. Mutated only at game end; a stopped game
/// counts as neither a win nor a game played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Games won.
    pub wins: u32,
    /// Games finished, won or lost.
    pub games_played: u32,
}

/// Persistence collaborator for the [`ScoreRecord`].
///
/// `load` is called once at engine construction, `save` after every win or
/// loss, `clear` when the player resets their progress.
pub trait ScoreStore {
    /// Load the persisted score. A store with nothing persisted yet returns
    /// `ScoreRecord::default()`, not an error.
    fn load(&mut self) -> Result<ScoreRecord, StoreError>;

    /// Persist the score.
    fn save(&mut self, record: &ScoreRecord) -> Result<(), StoreError>;

    /// Remove any persisted score.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Failure inside a score store.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying I/O failed.
    Io(std::io::Error),
    /// Persisted data could not be encoded or decoded.
    Format(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "score store I/O error: {}", err),
            StoreError::Format(err) => write!(f, "score store format error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Format(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_default_is_zero() {
        let record = ScoreRecord::default();
        assert_eq!(record.wins, 0);
        assert_eq!(record.games_played, 0);
    }

    #[test]
    fn test_score_record_serde_round_trip() {
        let record = ScoreRecord {
            wins: 3,
            games_played: 11,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(format!("{}", err).contains("I/O error"));
    }
}
