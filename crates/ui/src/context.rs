use std::sync::Arc;

use services::SessionController;
use trainer_core::ScoringRules;
use trainer_core::model::Vocabulary;

pub trait UiApp: Send + Sync {
    fn vocabulary(&self) -> Arc<Vocabulary>;
    fn scoring_rules(&self) -> ScoringRules;
}

#[derive(Clone)]
pub struct AppContext {
    vocabulary: Arc<Vocabulary>,
    rules: ScoringRules,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            vocabulary: app.vocabulary(),
            rules: app.scoring_rules(),
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    #[must_use]
    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// A fresh controller over the shared word list.
    #[must_use]
    pub fn start_session(&self) -> SessionController {
        SessionController::new(self.vocabulary()).with_rules(self.rules)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
