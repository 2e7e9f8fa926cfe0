use dioxus::prelude::Key;
use flash_core::flip::CardFace;
use flash_core::model::ENGLISH_FIELD;
use services::{DoneReason, SessionController, SessionState};

/// What the user asked the card view to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIntent {
    /// The word is known; drop it from the remaining set.
    Right,
    /// Not known yet; flip back and move on.
    Wrong,
    /// Show the English side early.
    Flip,
    Reset,
}

impl CardIntent {
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowRight => Some(Self::Right),
            Key::ArrowLeft => Some(Self::Wrong),
            Key::Character(value) => match value.as_str() {
                "k" | "K" => Some(Self::Right),
                "j" | "J" => Some(Self::Wrong),
                " " => Some(Self::Flip),
                _ => None,
            },
            _ => None,
        }
    }
}

/// UI-ready snapshot of a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub title: String,
    pub term: String,
    pub face: CardFace,
    pub width: u32,
    pub progress_label: String,
    pub can_answer: bool,
    pub done: bool,
    pub notice: Option<String>,
}

impl CardVm {
    #[must_use]
    pub fn from_session(session: &SessionController) -> Self {
        let frame = session.frame();
        let language_name = session
            .language()
            .map(|language| language.display_name().to_owned())
            .unwrap_or_default();

        let (title, term) = match session.state() {
            SessionState::Idle => (String::new(), String::new()),
            SessionState::Showing { .. } | SessionState::Flipping { .. } => {
                let title = match frame.face {
                    CardFace::Front => language_name,
                    CardFace::Back => ENGLISH_FIELD.to_owned(),
                };
                let term = session
                    .current_card()
                    .map(|card| card.term_on(frame.face).to_string())
                    .unwrap_or_default();
                (title, term)
            }
            SessionState::Done { reason } => match reason {
                DoneReason::AllLearned => ("Done!".to_owned(), reason.message().to_owned()),
                DoneReason::NothingToLearn | DoneReason::Unavailable { .. } => {
                    (language_name, reason.message().to_owned())
                }
            },
        };

        Self {
            title,
            term,
            face: frame.face,
            width: frame.width,
            progress_label: format!("Words remaining: {}", session.progress()),
            can_answer: session.state().is_showing(),
            done: session.state().is_done(),
            notice: session.notice().map(|notice| notice.to_string()),
        }
    }

    #[must_use]
    pub fn face_class(&self) -> &'static str {
        match self.face {
            CardFace::Front => "card card--front",
            CardFace::Back => "card card--back",
        }
    }
}
