//! File-backed word storage.
//!
//! ```text
//! {assets_dir}/
//! └── {language}_words.csv            # static table, header row required
//! {progress_dir}/
//! └── words_to_learn_{language}.json  # remaining words, rewritten on every change
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flash_core::model::{Language, RawWordRecord};

use crate::repository::{StorageError, WordBackend};

mod mapping;
mod table;

#[derive(Debug, Clone)]
pub struct FileBackend {
    assets_dir: PathBuf,
    progress_dir: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(assets_dir: impl Into<PathBuf>, progress_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            progress_dir: progress_dir.into(),
        }
    }

    #[must_use]
    pub fn table_path(&self, language: Language) -> PathBuf {
        self.assets_dir
            .join(format!("{}_words.csv", language.slug()))
    }

    #[must_use]
    pub fn progress_path(&self, language: Language) -> PathBuf {
        self.progress_dir
            .join(format!("words_to_learn_{}.json", language.slug()))
    }
}

/// Write through a sibling temp file so a crash never truncates the old file.
fn write_atomic(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

impl WordBackend for FileBackend {
    fn read_table(&self, language: Language) -> Result<Vec<RawWordRecord>, StorageError> {
        table::read_word_table(&self.table_path(language), language.field_mapping())
    }

    fn read_progress(
        &self,
        language: Language,
    ) -> Result<Option<Vec<RawWordRecord>>, StorageError> {
        let path = self.progress_path(language);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        mapping::decode_progress(language.field_mapping(), &content).map(Some)
    }

    fn write_progress(
        &self,
        language: Language,
        records: &[RawWordRecord],
    ) -> Result<(), StorageError> {
        let content = mapping::encode_progress(language.field_mapping(), records)?;
        write_atomic(&self.progress_path(language), &content)
    }

    fn remove_progress(&self, language: Language) -> Result<bool, StorageError> {
        match fs::remove_file(self.progress_path(language)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn has_progress(&self, language: Language) -> bool {
        self.progress_path(language).is_file()
    }
}
