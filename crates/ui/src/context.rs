use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use flash_core::model::Language;
use services::AppServices;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// Language to open straight away instead of the picker.
    fn initial_language(&self) -> Option<Language>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    initial_language: Option<Language>,
    initial_language_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_language = app.initial_language();

        Self {
            services: app.services(),
            initial_language,
            initial_language_once: Arc::new(AtomicBool::new(initial_language.is_some())),
        }
    }

    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone()
    }

    /// The configured launch language, handed out only once.
    #[must_use]
    pub fn take_initial_language(&self) -> Option<Language> {
        if self.initial_language_once.swap(false, Ordering::AcqRel) {
            self.initial_language
        } else {
            None
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
