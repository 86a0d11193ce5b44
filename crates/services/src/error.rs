//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use trainer_core::model::VocabularyError;

/// Errors emitted while loading a word list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyLoadError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Errors emitted by session operations that leave the current pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no missed words to review")]
    NoMistakes,
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}
