use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use flash_core::model::{Language, ProgressCounts, RawWordRecord, WordPair};
use rand::Rng;
use thiserror::Error;

use crate::files::FileBackend;
use crate::repository::{StorageError, WordBackend};
use crate::selection::{EmptyListError, pick_random};

/// Errors surfaced by [`WordSetStore`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("cannot load language {language}: {source}")]
    DataSource {
        language: Language,
        #[source]
        source: StorageError,
    },

    #[error("cannot save progress for {language}: {source}")]
    Persist {
        language: Language,
        #[source]
        source: StorageError,
    },

    #[error("cannot delete progress for {language}: {source}")]
    Delete {
        language: Language,
        #[source]
        source: StorageError,
    },
}

/// Drop every record with a missing or blank field, and every repeat of a pair
/// already seen. Table order is kept.
#[must_use]
pub fn filter_pairs(language: Language, records: &[RawWordRecord]) -> Vec<WordPair> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut incomplete = 0usize;
    let mut repeated = 0usize;
    let mut pairs = Vec::with_capacity(records.len());
    for record in records {
        let Some(pair) = record.to_pair() else {
            incomplete += 1;
            continue;
        };
        if seen.insert(pair.clone()) {
            pairs.push(pair);
        } else {
            repeated += 1;
        }
    }
    if incomplete > 0 {
        log::debug!("dropped {incomplete} incomplete {language} rows");
    }
    if repeated > 0 {
        log::debug!("dropped {repeated} repeated {language} rows");
    }
    pairs
}

/// Words and table size for a session that is about to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionWords {
    pub remaining: Vec<WordPair>,
    /// Size of the filtered full table.
    pub total: usize,
}

/// Bridge between durable word data and the in-memory session.
///
/// The only component that touches the word tables and progress records.
#[derive(Clone)]
pub struct WordSetStore {
    backend: Arc<dyn WordBackend>,
}

impl WordSetStore {
    #[must_use]
    pub fn new(backend: Arc<dyn WordBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by CSV tables and JSON progress files.
    #[must_use]
    pub fn files(assets_dir: impl Into<PathBuf>, progress_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(assets_dir, progress_dir)))
    }

    /// Complete word list for a language, without incomplete rows.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataSource` if the table is missing or malformed.
    pub fn load_full_table(&self, language: Language) -> Result<Vec<WordPair>, StoreError> {
        let records = self.read_table(language)?;
        Ok(filter_pairs(language, &records))
    }

    /// Words the user still has to learn.
    ///
    /// Restores saved progress when present. A corrupt progress record yields an
    /// empty list. Without saved progress the full table is copied verbatim into
    /// a new progress record and returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataSource` only if the full table has to be read and
    /// cannot be.
    pub fn load_remaining(&self, language: Language) -> Result<Vec<WordPair>, StoreError> {
        if let Some(words) = self.restore_progress(language) {
            return Ok(words);
        }
        let records = self.read_table(language)?;
        self.seed_progress(language, &records);
        Ok(filter_pairs(language, &records))
    }

    /// Everything a session needs to open, reading the table only once.
    ///
    /// Same rules as [`WordSetStore::load_remaining`], except that an empty
    /// table leaves no progress record behind.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataSource` if the table cannot be read.
    pub fn load_session(&self, language: Language) -> Result<SessionWords, StoreError> {
        let records = self.read_table(language)?;
        let full = filter_pairs(language, &records);
        let remaining = match self.restore_progress(language) {
            Some(words) => words,
            None if full.is_empty() => Vec::new(),
            None => {
                self.seed_progress(language, &records);
                full.clone()
            }
        };
        Ok(SessionWords {
            remaining,
            total: full.len(),
        })
    }

    /// Overwrite the saved progress with `words`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persist` if the record cannot be written.
    pub fn save_remaining(&self, language: Language, words: &[WordPair]) -> Result<(), StoreError> {
        let records: Vec<RawWordRecord> = words.iter().map(RawWordRecord::from_pair).collect();
        self.backend
            .write_progress(language, &records)
            .map_err(|source| StoreError::Persist { language, source })?;
        log::debug!("saved {language} progress ({} words)", words.len());
        Ok(())
    }

    /// Forget saved progress. Succeeds when there was none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Delete` if an existing record cannot be removed.
    pub fn delete_progress(&self, language: Language) -> Result<(), StoreError> {
        let removed = self
            .backend
            .remove_progress(language)
            .map_err(|source| StoreError::Delete { language, source })?;
        if removed {
            log::info!("deleted {language} progress");
        }
        Ok(())
    }

    #[must_use]
    pub fn has_progress(&self, language: Language) -> bool {
        self.backend.has_progress(language)
    }

    /// Remaining and total counts, or `None` if nothing has been saved yet.
    ///
    /// Unreadable progress counts as nothing remaining.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataSource` if the full table cannot be read.
    pub fn progress_counts(&self, language: Language) -> Result<Option<ProgressCounts>, StoreError> {
        if !self.has_progress(language) {
            return Ok(None);
        }
        let total = self.load_full_table(language)?.len();
        let remaining = match self.backend.read_progress(language) {
            Ok(Some(records)) => filter_pairs(language, &records).len(),
            Ok(None) => return Ok(None),
            Err(err) => {
                log::warn!("ignoring unreadable {language} progress: {err}");
                0
            }
        };
        Ok(Some(ProgressCounts::new(remaining, total)))
    }

    /// Uniformly pick one of `words`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyListError` if `words` is empty.
    pub fn pick_random<'a, R: Rng + ?Sized>(
        &self,
        words: &'a [WordPair],
        rng: &mut R,
    ) -> Result<&'a WordPair, EmptyListError> {
        pick_random(words, rng)
    }

    /// Saved words, `Some(empty)` if the record is unreadable, `None` if absent.
    fn restore_progress(&self, language: Language) -> Option<Vec<WordPair>> {
        match self.backend.read_progress(language) {
            Ok(Some(records)) => {
                log::info!("restored {language} progress ({} rows)", records.len());
                Some(filter_pairs(language, &records))
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("ignoring unreadable {language} progress: {err}");
                Some(Vec::new())
            }
        }
    }

    /// First progress record: the raw table rows, verbatim.
    fn seed_progress(&self, language: Language, records: &[RawWordRecord]) {
        log::info!("no saved {language} progress, starting from the full table");
        if let Err(err) = self.backend.write_progress(language, records) {
            log::warn!("could not create {language} progress: {err}");
        }
    }

    fn read_table(&self, language: Language) -> Result<Vec<RawWordRecord>, StoreError> {
        self.backend
            .read_table(language)
            .map_err(|source| StoreError::DataSource { language, source })
    }
}
