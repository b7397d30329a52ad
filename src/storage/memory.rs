//! In-process score store.

use super::{ScoreRecord, ScoreStore, StoreError};

/// Score store backed by process memory. Nothing survives the process;
/// used in tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Option<ScoreRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a score.
    #[must_use]
    pub fn with_record(record: ScoreRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// The stored record, if any was saved.
    #[must_use]
    pub fn record(&self) -> Option<ScoreRecord> {
        self.record
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<ScoreRecord, StoreError> {
        Ok(self.record.unwrap_or_default())
    }

    fn save(&mut self, record: &ScoreRecord) -> Result<(), StoreError> {
        self.record = Some(*record);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}
