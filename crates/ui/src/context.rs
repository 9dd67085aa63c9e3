use std::sync::Arc;

use services::{QuizHandle, RandomPhotoService};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    /// The running quiz, or `None` when the roster could not be loaded.
    fn quiz(&self) -> Option<QuizHandle>;
    fn photos(&self) -> Arc<RandomPhotoService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Option<QuizHandle>,
    photos: Arc<RandomPhotoService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            photos: app.photos(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Option<QuizHandle> {
        self.quiz.clone()
    }

    #[must_use]
    pub fn has_quiz(&self) -> bool {
        self.quiz.is_some()
    }

    #[must_use]
    pub fn photos(&self) -> Arc<RandomPhotoService> {
        Arc::clone(&self.photos)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
