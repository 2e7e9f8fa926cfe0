use std::fmt;

use flash_core::flip::{CardFace, FlipAnimation};

/// Why a session has nothing left to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneReason {
    /// Every word was marked known.
    AllLearned,
    /// The language's table has no usable rows.
    NothingToLearn,
    /// The table could not be read.
    Unavailable { message: String },
}

impl DoneReason {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            DoneReason::AllLearned => "All words learned 🎉",
            DoneReason::NothingToLearn => "Nothing to learn for this language yet.",
            DoneReason::Unavailable { message } => message,
        }
    }
}

/// Progress state machine of a learning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session started, or the session was closed.
    Idle,
    /// A card at rest.
    Showing { face: CardFace },
    /// A flip animation is running.
    Flipping { animation: FlipAnimation },
    /// Nothing left to show.
    Done { reason: DoneReason },
}

impl SessionState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Showing { .. } => "showing",
            SessionState::Flipping { .. } => "flipping",
            SessionState::Done { .. } => "done",
        }
    }

    #[must_use]
    pub const fn is_showing(&self) -> bool {
        matches!(self, SessionState::Showing { .. })
    }

    #[must_use]
    pub const fn is_flipping(&self) -> bool {
        matches!(self, SessionState::Flipping { .. })
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, SessionState::Done { .. })
    }
}

/// User-facing operations, named in rejection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MarkKnown,
    Skip,
    AutoFlip,
    ManualFlipBack,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::MarkKnown => "mark known",
            Action::Skip => "skip",
            Action::AutoFlip => "flip",
            Action::ManualFlipBack => "flip back",
        };
        f.write_str(label)
    }
}
