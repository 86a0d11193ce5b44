#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod vocabulary_service;

pub use trainer_core::ScoringRules;

pub use error::{SessionError, VocabularyLoadError};
pub use sessions::{SessionController, SessionProgress, SessionSummary};
pub use vocabulary_service::{BUNDLED_VOCABULARY, VocabularyService};
