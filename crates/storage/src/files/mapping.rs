use flash_core::model::{FieldMapping, RawWordRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// One progress row keyed by the language's column names.
struct ProgressRow<'a> {
    mapping: FieldMapping,
    record: &'a RawWordRecord,
}

impl Serialize for ProgressRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.mapping.source_field, &self.record.source)?;
        map.serialize_entry(self.mapping.target_field, &self.record.target)?;
        map.end()
    }
}

pub(crate) fn encode_progress(
    mapping: FieldMapping,
    records: &[RawWordRecord],
) -> Result<String, StorageError> {
    let rows: Vec<ProgressRow<'_>> = records
        .iter()
        .map(|record| ProgressRow { mapping, record })
        .collect();
    serde_json::to_string_pretty(&rows).map_err(ser)
}

/// Decode a progress document. Non-string or absent fields become `None`.
pub(crate) fn decode_progress(
    mapping: FieldMapping,
    content: &str,
) -> Result<Vec<RawWordRecord>, StorageError> {
    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(content).map_err(|e| StorageError::Corrupt(e.to_string()))?;
    Ok(rows
        .iter()
        .map(|row| {
            RawWordRecord::new(
                string_field(row, mapping.source_field),
                string_field(row, mapping.target_field),
            )
        })
        .collect())
}

fn string_field(row: &Map<String, Value>, field: &str) -> Option<String> {
    row.get(field).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::Language;

    #[test]
    fn encodes_rows_with_language_columns() {
        let mapping = Language::French.field_mapping();
        let records = vec![RawWordRecord::new(Some("été".into()), Some("summer".into()))];
        let json = encode_progress(mapping, &records).unwrap();
        assert!(json.contains("\"French\": \"été\""), "{json}");
        assert!(json.contains("\"English\": \"summer\""), "{json}");
    }

    #[test]
    fn decodes_missing_and_non_string_fields_as_none() {
        let mapping = Language::German.field_mapping();
        let json = r#"[{"German": "Hund", "English": "dog"}, {"German": 3}, {"English": null}]"#;
        let records = decode_progress(mapping, json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].source.as_deref(), Some("Hund"));
        assert_eq!(records[1], RawWordRecord::new(None, None));
        assert_eq!(records[2], RawWordRecord::new(None, None));
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let mapping = Language::French.field_mapping();
        let err = decode_progress(mapping, "[{\"French\": ").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let mapping = Language::French.field_mapping();
        let err = decode_progress(mapping, "{\"French\": \"chat\"}").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
