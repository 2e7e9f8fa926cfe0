use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column holding the English term in every word table.
pub const ENGLISH_FIELD: &str = "English";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// A language the app ships a word table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
    Spanish,
    German,
    Italian,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Italian,
    ];

    /// Lowercase identifier used in file names, routes and CLI arguments.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::German => "german",
            Language::Italian => "italian",
        }
    }

    /// Human readable name. Doubles as the column name of the foreign term.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
        }
    }

    #[must_use]
    pub const fn field_mapping(self) -> FieldMapping {
        FieldMapping {
            source_field: self.display_name(),
            target_field: ENGLISH_FIELD,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LanguageError::UnknownLanguage(s.to_string()))
    }
}

/// Names of the two record fields a language's tables and progress files use.
///
/// Resolved once per language so lookups never re-derive column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub source_field: &'static str,
    pub target_field: &'static str,
}
