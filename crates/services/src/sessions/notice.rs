use std::fmt;

/// Non-blocking problem the shell should show without interrupting the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The remaining words could not be written; progress lives in memory only.
    ProgressNotSaved,
    /// Saved progress could not be removed during a reset.
    ProgressNotDeleted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ProgressNotSaved => f.write_str("Progress could not be saved."),
            Notice::ProgressNotDeleted => {
                f.write_str("Saved progress could not be deleted; starting over anyway.")
            }
        }
    }
}
