use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flash_core::model::{FieldMapping, RawWordRecord};

use crate::repository::StorageError;

/// Read a word table with a header row, picking the two mapped columns by name.
///
/// Empty cells come back as `None`. Extra columns are ignored and short rows
/// are tolerated.
pub(crate) fn read_word_table(
    path: &Path,
    mapping: FieldMapping,
) -> Result<Vec<RawWordRecord>, StorageError> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let source_col = column_index(&headers, mapping.source_field)?;
    let target_col = column_index(&headers, mapping.target_field)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawWordRecord::new(
            cell(&row, source_col),
            cell(&row, target_col),
        ));
    }
    Ok(records)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, StorageError> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| StorageError::MissingColumn {
            column: name.to_string(),
        })
}

fn cell(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::Language;
    use std::fs;

    fn write_table(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("french_words.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_columns_by_name_in_any_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "English,Notes,French\ncat,pet,chat\ndog,,chien\n");

        let records = read_word_table(&path, Language::French.field_mapping()).unwrap();
        assert_eq!(
            records,
            vec![
                RawWordRecord::new(Some("chat".into()), Some("cat".into())),
                RawWordRecord::new(Some("chien".into()), Some("dog".into())),
            ]
        );
    }

    #[test]
    fn empty_and_short_rows_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "French,English\nchat,\n\"\",dog\nseul\n");

        let records = read_word_table(&path, Language::French.field_mapping()).unwrap();
        assert_eq!(
            records,
            vec![
                RawWordRecord::new(Some("chat".into()), None),
                RawWordRecord::new(None, Some("dog".into())),
                RawWordRecord::new(Some("seul".into()), None),
            ]
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "Spanish,English\ngato,cat\n");

        let err = read_word_table(&path, Language::French.field_mapping()).unwrap_err();
        assert!(matches!(err, StorageError::MissingColumn { ref column } if column == "French"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = read_word_table(&path, Language::French.field_mapping()).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn tolerates_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "\u{feff}French,English\nchat,cat\n");

        let records = read_word_table(&path, Language::French.field_mapping()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
