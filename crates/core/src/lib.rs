#![forbid(unsafe_code)]

pub mod flip;
pub mod model;

pub use flip::{CardFace, FlipAnimation, FlipDirection, FlipFrame, FlipStep};
pub use model::{
    FieldMapping, Language, LanguageError, ProgressCounts, RawWordRecord, Term, TermError,
    WordPair,
};
