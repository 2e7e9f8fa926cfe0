use flash_core::model::{Language, RawWordRecord};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(PathBuf),

    #[error("missing column `{column}`")]
    MissingColumn { column: String },

    #[error("corrupt progress data: {0}")]
    Corrupt(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Raw persistence contract for word tables and progress records.
///
/// Backends never filter: rows come back exactly as stored. Validation is the
/// job of [`crate::WordSetStore`].
pub trait WordBackend: Send + Sync {
    /// Read the static word table for a language.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table is missing or malformed.
    fn read_table(&self, language: Language) -> Result<Vec<RawWordRecord>, StorageError>;

    /// Read the saved progress for a language, `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the record cannot be decoded.
    fn read_progress(&self, language: Language)
    -> Result<Option<Vec<RawWordRecord>>, StorageError>;

    /// Replace the saved progress for a language.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn write_progress(
        &self,
        language: Language,
        records: &[RawWordRecord],
    ) -> Result<(), StorageError>;

    /// Remove the saved progress. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing record cannot be removed.
    fn remove_progress(&self, language: Language) -> Result<bool, StorageError>;

    fn has_progress(&self, language: Language) -> bool;
}

#[derive(Debug, Clone)]
enum StoredProgress {
    Records(Vec<RawWordRecord>),
    Corrupt,
}

#[derive(Debug, Clone, Copy, Default)]
struct FailureFlags {
    writes: bool,
    removes: bool,
}

/// Simple in-memory backend for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    tables: Arc<Mutex<HashMap<Language, Vec<RawWordRecord>>>>,
    progress: Arc<Mutex<HashMap<Language, StoredProgress>>>,
    failures: Arc<Mutex<FailureFlags>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a word table from `(foreign, english)` rows.
    #[must_use]
    pub fn with_table<'a>(
        self,
        language: Language,
        rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let records = rows
            .into_iter()
            .map(|(source, target)| {
                RawWordRecord::new(Some(source.to_owned()), Some(target.to_owned()))
            })
            .collect();
        self.insert_table(language, records);
        self
    }

    pub fn insert_table(&self, language: Language, records: Vec<RawWordRecord>) {
        if let Ok(mut guard) = self.tables.lock() {
            guard.insert(language, records);
        }
    }

    pub fn insert_progress(&self, language: Language, records: Vec<RawWordRecord>) {
        if let Ok(mut guard) = self.progress.lock() {
            guard.insert(language, StoredProgress::Records(records));
        }
    }

    /// Store a progress record that fails to decode on the next read.
    pub fn insert_corrupt_progress(&self, language: Language) {
        if let Ok(mut guard) = self.progress.lock() {
            guard.insert(language, StoredProgress::Corrupt);
        }
    }

    /// Snapshot of the stored progress, `None` if absent or corrupt.
    #[must_use]
    pub fn progress(&self, language: Language) -> Option<Vec<RawWordRecord>> {
        let guard = self.progress.lock().ok()?;
        match guard.get(&language)? {
            StoredProgress::Records(records) => Some(records.clone()),
            StoredProgress::Corrupt => None,
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut guard) = self.failures.lock() {
            guard.writes = fail;
        }
    }

    pub fn fail_removes(&self, fail: bool) {
        if let Ok(mut guard) = self.failures.lock() {
            guard.removes = fail;
        }
    }

    fn failures(&self) -> Result<FailureFlags, StorageError> {
        self.failures
            .lock()
            .map(|guard| *guard)
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl WordBackend for InMemoryBackend {
    fn read_table(&self, language: Language) -> Result<Vec<RawWordRecord>, StorageError> {
        let guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard
            .get(&language)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from(language.slug())))
    }

    fn read_progress(
        &self,
        language: Language,
    ) -> Result<Option<Vec<RawWordRecord>>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        match guard.get(&language) {
            None => Ok(None),
            Some(StoredProgress::Records(records)) => Ok(Some(records.clone())),
            Some(StoredProgress::Corrupt) => {
                Err(StorageError::Corrupt("unreadable progress record".into()))
            }
        }
    }

    fn write_progress(
        &self,
        language: Language,
        records: &[RawWordRecord],
    ) -> Result<(), StorageError> {
        if self.failures()?.writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.insert(language, StoredProgress::Records(records.to_vec()));
        Ok(())
    }

    fn remove_progress(&self, language: Language) -> Result<bool, StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if !guard.contains_key(&language) {
            return Ok(false);
        }
        if self.failures()?.removes {
            return Err(StorageError::Unavailable("removals disabled".into()));
        }
        guard.remove(&language);
        Ok(true)
    }

    fn has_progress(&self, language: Language) -> bool {
        self.progress
            .lock()
            .is_ok_and(|guard| guard.contains_key(&language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, target: &str) -> RawWordRecord {
        RawWordRecord::new(Some(source.into()), Some(target.into()))
    }

    #[test]
    fn round_trips_progress() {
        let backend = InMemoryBackend::new();
        let records = vec![record("chat", "cat"), RawWordRecord::new(None, Some("x".into()))];
        backend
            .write_progress(Language::French, &records)
            .unwrap();

        let fetched = backend.read_progress(Language::French).unwrap();
        assert_eq!(fetched, Some(records));
        assert!(backend.has_progress(Language::French));
        assert!(!backend.has_progress(Language::German));
    }

    #[test]
    fn missing_table_is_not_found() {
        let backend = InMemoryBackend::new();
        let err = backend.read_table(Language::Italian).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn remove_is_idempotent() {
        let backend = InMemoryBackend::new();
        backend.insert_progress(Language::Spanish, vec![record("gato", "cat")]);
        assert!(backend.remove_progress(Language::Spanish).unwrap());
        assert!(!backend.remove_progress(Language::Spanish).unwrap());
    }

    #[test]
    fn corrupt_progress_reports_error() {
        let backend = InMemoryBackend::new();
        backend.insert_corrupt_progress(Language::French);
        let err = backend.read_progress(Language::French).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn failing_writes_leave_previous_progress() {
        let backend = InMemoryBackend::new();
        backend.insert_progress(Language::French, vec![record("chat", "cat")]);
        backend.fail_writes(true);

        let err = backend.write_progress(Language::French, &[]).unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(
            backend.progress(Language::French),
            Some(vec![record("chat", "cat")])
        );
    }
}
