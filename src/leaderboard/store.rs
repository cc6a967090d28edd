//! Score persistence.
//!
//! `ScoreStore` is the seam between the leaderboard contract and whatever
//! actually keeps the records. The shipped backend is a JSON array on
//! disk; a hosted database would slot in behind the same trait.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::leaderboard::error::StoreError;
use crate::leaderboard::types::ScoreRecord;

pub trait ScoreStore: Send + Sync {
    /// Append a record and return it as stored.
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, StoreError>;

    /// All records, in insertion order. Ordering for display is the
    /// service's job, not the store's.
    fn fetch_all(&self) -> Result<Vec<ScoreRecord>, StoreError>;
}

/// File-backed store: one JSON array, read-modify-written whole under a
/// lock. A missing file reads as an empty leaderboard.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_records(&self, records: &[ScoreRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, StoreError> {
        // A poisoned lock is recoverable: the records live in the file, not
        // in memory guarded by the mutex.
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;
        Ok(record)
    }

    fn fetch_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> FileStore {
        let path = std::env::temp_dir().join(format!("fusion-grid-{}.json", Uuid::new_v4()));
        FileStore::new(path)
    }

    fn record(nickname: &str, score: u32) -> ScoreRecord {
        ScoreRecord {
            nickname: nickname.to_string(),
            score,
            time_taken: None,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = temp_store();
        assert_eq!(store.fetch_all().unwrap(), Vec::new());
    }

    #[test]
    fn test_insert_then_fetch_roundtrip() {
        let store = temp_store();
        store.insert(record("ada", 1200)).unwrap();
        store.insert(record("bob", 800)).unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nickname, "ada");
        assert_eq!(records[1].score, 800);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_is_a_backend_error() {
        let store = temp_store();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.fetch_all(), Err(StoreError::Corrupt(_))));
        let _ = fs::remove_file(store.path());
    }
}
