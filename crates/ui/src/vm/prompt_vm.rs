use services::LanguageStatus;

/// The continue-or-reset question shown before resuming saved progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptVm {
    pub title: String,
    pub message: String,
}

impl PromptVm {
    /// `None` when there is nothing to resume.
    #[must_use]
    pub fn from_status(status: &LanguageStatus) -> Option<Self> {
        let progress = status.progress?;
        let name = status.language.display_name();
        Some(Self {
            title: name.to_owned(),
            message: format!("You have {progress} words left in {name}"),
        })
    }
}
