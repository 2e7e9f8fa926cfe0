use serde::{Deserialize, Serialize};

use crate::flip::CardFace;
use crate::model::term::{Term, TermError};

/// One vocabulary entry: the foreign term and its English translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    source: Term,
    target: Term,
}

impl WordPair {
    #[must_use]
    pub fn new(source: Term, target: Term) -> Self {
        Self { source, target }
    }

    /// Build a pair from raw strings.
    ///
    /// # Errors
    ///
    /// Returns `TermError::Blank` if either side is blank.
    pub fn parse(source: impl Into<String>, target: impl Into<String>) -> Result<Self, TermError> {
        Ok(Self::new(Term::parse(source)?, Term::parse(target)?))
    }

    /// The foreign-language term.
    #[must_use]
    pub fn source(&self) -> &Term {
        &self.source
    }

    /// The English term.
    #[must_use]
    pub fn target(&self) -> &Term {
        &self.target
    }

    /// Term printed on the given side of the card.
    #[must_use]
    pub fn term_on(&self, face: CardFace) -> &Term {
        match face {
            CardFace::Front => &self.source,
            CardFace::Back => &self.target,
        }
    }
}

/// A row exactly as read from a table or progress file, before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawWordRecord {
    pub source: Option<String>,
    pub target: Option<String>,
}

impl RawWordRecord {
    #[must_use]
    pub fn new(source: Option<String>, target: Option<String>) -> Self {
        Self { source, target }
    }

    #[must_use]
    pub fn from_pair(pair: &WordPair) -> Self {
        Self {
            source: Some(pair.source().as_str().to_owned()),
            target: Some(pair.target().as_str().to_owned()),
        }
    }

    /// Returns the validated pair, or `None` if either field is missing or blank.
    #[must_use]
    pub fn to_pair(&self) -> Option<WordPair> {
        let source = Term::parse(self.source.clone()?).ok()?;
        let target = Term::parse(self.target.clone()?).ok()?;
        Some(WordPair::new(source, target))
    }
}

impl From<&WordPair> for RawWordRecord {
    fn from(pair: &WordPair) -> Self {
        Self::from_pair(pair)
    }
}
