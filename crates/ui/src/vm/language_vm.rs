use flash_core::model::Language;
use services::LanguageStatus;

/// One entry of the language picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageTileVm {
    pub language: Language,
    pub slug: &'static str,
    pub label: &'static str,
    pub detail: String,
    pub available: bool,
    /// Saved progress exists, so picking the tile asks to continue or reset.
    pub resumes: bool,
}

impl LanguageTileVm {
    #[must_use]
    pub fn from_status(status: &LanguageStatus) -> Self {
        let detail = if !status.available {
            "Unavailable".to_owned()
        } else if let Some(progress) = status.progress {
            format!("{progress} left")
        } else {
            "New".to_owned()
        };

        Self {
            language: status.language,
            slug: status.language.slug(),
            label: status.language.display_name(),
            detail,
            available: status.available,
            resumes: status.has_progress(),
        }
    }
}

#[must_use]
pub fn map_language_tiles(statuses: &[LanguageStatus]) -> Vec<LanguageTileVm> {
    statuses.iter().map(LanguageTileVm::from_status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::ProgressCounts;

    #[test]
    fn tile_details_follow_status() {
        let tiles = map_language_tiles(&[
            LanguageStatus {
                language: Language::French,
                progress: Some(ProgressCounts::new(12, 100)),
                available: true,
            },
            LanguageStatus {
                language: Language::Spanish,
                progress: None,
                available: true,
            },
            LanguageStatus {
                language: Language::German,
                progress: None,
                available: false,
            },
        ]);

        assert_eq!(tiles[0].detail, "12 / 100 left");
        assert!(tiles[0].resumes);
        assert_eq!(tiles[1].detail, "New");
        assert!(!tiles[1].resumes);
        assert_eq!(tiles[2].detail, "Unavailable");
        assert_eq!(tiles[2].slug, "german");
        assert_eq!(tiles[2].label, "German");
    }
}
