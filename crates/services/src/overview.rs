use flash_core::model::{Language, ProgressCounts};
use storage::WordSetStore;

use crate::error::SessionError;

/// What the language picker knows about one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatus {
    pub language: Language,
    /// `None` until a session has saved progress.
    pub progress: Option<ProgressCounts>,
    /// `false` if the word table cannot be read.
    pub available: bool,
}

impl LanguageStatus {
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }
}

/// Read-mostly view over every language, for the picker and the CLI.
#[derive(Clone)]
pub struct LanguageOverview {
    store: WordSetStore,
}

impl LanguageOverview {
    #[must_use]
    pub fn new(store: WordSetStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &WordSetStore {
        &self.store
    }

    #[must_use]
    pub fn status(&self, language: Language) -> LanguageStatus {
        match self.store.progress_counts(language) {
            Ok(progress) => LanguageStatus {
                language,
                progress,
                available: self.store.load_full_table(language).is_ok(),
            },
            Err(err) => {
                log::warn!("{err}");
                LanguageStatus {
                    language,
                    progress: None,
                    available: false,
                }
            }
        }
    }

    #[must_use]
    pub fn list(&self) -> Vec<LanguageStatus> {
        Language::ALL.iter().map(|&language| self.status(language)).collect()
    }

    /// Forget saved progress for `language` outside of a running session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the progress record cannot be removed.
    pub fn reset(&self, language: Language) -> Result<(), SessionError> {
        self.store.delete_progress(language)?;
        Ok(())
    }
}
