use flash_core::model::WordPair;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Raised when asked to pick from nothing. Callers check emptiness first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot pick a word from an empty list")]
pub struct EmptyListError;

/// Uniformly pick one word.
///
/// # Errors
///
/// Returns `EmptyListError` if `words` is empty.
pub fn pick_random<'a, R: Rng + ?Sized>(
    words: &'a [WordPair],
    rng: &mut R,
) -> Result<&'a WordPair, EmptyListError> {
    words.choose(rng).ok_or(EmptyListError)
}
