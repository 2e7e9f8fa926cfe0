mod language;
mod progress;
mod term;
mod word;

pub use language::{ENGLISH_FIELD, FieldMapping, Language, LanguageError};
pub use progress::ProgressCounts;
pub use term::{Term, TermError};
pub use word::{RawWordRecord, WordPair};
