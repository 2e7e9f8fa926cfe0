use std::path::PathBuf;

use storage::WordSetStore;

use crate::overview::LanguageOverview;
use crate::sessions::{Scheduler, SessionController};

/// Assembles app-facing services around one word store.
#[derive(Clone)]
pub struct AppServices {
    store: WordSetStore,
    overview: LanguageOverview,
}

impl AppServices {
    #[must_use]
    pub fn new(store: WordSetStore) -> Self {
        let overview = LanguageOverview::new(store.clone());
        Self { store, overview }
    }

    /// Build services backed by CSV tables in `assets_dir` and JSON progress
    /// files in `progress_dir`.
    #[must_use]
    pub fn files(assets_dir: impl Into<PathBuf>, progress_dir: impl Into<PathBuf>) -> Self {
        Self::new(WordSetStore::files(assets_dir, progress_dir))
    }

    #[must_use]
    pub fn store(&self) -> &WordSetStore {
        &self.store
    }

    #[must_use]
    pub fn overview(&self) -> &LanguageOverview {
        &self.overview
    }

    /// A fresh, idle session driven by `scheduler`.
    #[must_use]
    pub fn new_session(&self, scheduler: Box<dyn Scheduler>) -> SessionController {
        SessionController::new(self.store.clone(), scheduler)
    }
}
