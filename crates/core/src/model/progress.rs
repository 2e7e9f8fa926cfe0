use serde::{Deserialize, Serialize};
use std::fmt;

/// Words still to learn against the size of the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressCounts {
    pub remaining: usize,
    pub total: usize,
}

impl ProgressCounts {
    #[must_use]
    pub const fn new(remaining: usize, total: usize) -> Self {
        Self { remaining, total }
    }
}

impl fmt::Display for ProgressCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.remaining, self.total)
    }
}
