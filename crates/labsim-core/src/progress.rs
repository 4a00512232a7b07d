//! Keyed best-ever progress records.
//!
//! Each level has a string key (`cse_stacks`, `ece_rlc`, ...) mapped to its
//! best [`Progress`] so far. Writes merge with the stored record taking the
//! per-field maximum, so replaying a level can never lower stars or xp.
//! Reads of unknown keys yield the zero record. Nothing is ever deleted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use labsim_types::Progress;

/// Errors from the file-backed store. The in-memory store never fails.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("progress file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("progress file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// A keyed progress store with max-merge write semantics
pub trait ProgressStore {
    /// Best record for `key`; zero if never written
    fn read(&self, key: &str) -> Progress;

    /// Merge `incoming` into the stored record (per-field max) and persist.
    /// Returns the merged record.
    fn write(&mut self, key: &str, incoming: Progress) -> Result<Progress, StoreError>;
}

/// Volatile store for tests and single-session use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Progress>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, key: &str) -> Progress {
        self.records.get(key).copied().unwrap_or_default()
    }

    fn write(&mut self, key: &str, incoming: Progress) -> Result<Progress, StoreError> {
        let merged = self.read(key).merged(incoming);
        self.records.insert(key.to_string(), merged);
        Ok(merged)
    }
}

/// Store backed by a single JSON file holding the whole key → record map.
/// The file is loaded once at construction and rewritten in full after
/// every merge, so the on-disk copy is always current.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: HashMap<String, Progress>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing records. A missing file
    /// is an empty store; a malformed file is an error rather than silent
    /// data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl ProgressStore for JsonFileStore {
    fn read(&self, key: &str) -> Progress {
        self.records.get(key).copied().unwrap_or_default()
    }

    fn write(&mut self, key: &str, incoming: Progress) -> Result<Progress, StoreError> {
        let merged = self.read(key).merged(incoming);
        self.records.insert(key.to_string(), merged);
        self.persist()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_max_merge() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("cse_stacks"), Progress::default());

        store.write("cse_stacks", Progress::new(2, 80)).unwrap();
        store.write("cse_stacks", Progress::new(3, 50)).unwrap();

        // stars and xp are maxed independently
        let record = store.read("cse_stacks");
        assert_eq!(record.stars, 3);
        assert_eq!(record.xp, 80);
    }

    #[test]
    fn test_write_never_downgrades() {
        let mut store = MemoryStore::new();
        store.write("mech_beams", Progress::new(3, 50)).unwrap();
        let merged = store.write("mech_beams", Progress::new(1, 10)).unwrap();
        assert_eq!(merged, Progress::new(3, 50));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.write("ece_dc", Progress::new(3, 50)).unwrap();
            store.write("ece_rlc", Progress::new(2, 30)).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.read("ece_dc"), Progress::new(3, 50));
        assert_eq!(reopened.read("ece_rlc"), Progress::new(2, 30));
        assert_eq!(reopened.read("missing"), Progress::default());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.read("anything"), Progress::default());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Format(_))
        ));
    }
}
