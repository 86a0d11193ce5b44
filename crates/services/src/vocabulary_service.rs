use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rng};
use tracing::{debug, info};

use trainer_core::model::{Vocabulary, VocabularyEntry};

use crate::error::VocabularyLoadError;

/// Word list bundled with the application.
pub const BUNDLED_VOCABULARY: &str = include_str!("../data/vocabulary.json");

/// Loads word lists from JSON and optionally shuffles their order.
///
/// The JSON format is an array of camelCase entry records:
/// `english`, `finnish`, `difficultyLevel`, `category`, `contextSentence`
/// and the optional `contextClue`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyService {
    shuffle: bool,
    seed: Option<u64>,
}

impl VocabularyService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable shuffling the list after loading.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Shuffle with a fixed seed so the order is reproducible. Implies shuffling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = Some(seed);
        self
    }

    /// Load the bundled word list.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyLoadError` if the bundled data fails to parse.
    pub fn load_bundled(&self) -> Result<Vocabulary, VocabularyLoadError> {
        self.load_str(BUNDLED_VOCABULARY)
    }

    /// Load a word list from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyLoadError::Io` if the file cannot be read, and the
    /// parse errors of `load_str` otherwise.
    pub fn load_path(&self, path: &Path) -> Result<Vocabulary, VocabularyLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| VocabularyLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = self.load_str(&raw)?;
        info!(path = %path.display(), words = vocabulary.len(), "loaded word list");
        Ok(vocabulary)
    }

    /// Parse a word list from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyLoadError::Json` for malformed JSON and
    /// `VocabularyLoadError::Vocabulary` for an empty list or invalid entries.
    pub fn load_str(&self, json: &str) -> Result<Vocabulary, VocabularyLoadError> {
        let mut entries: Vec<VocabularyEntry> = serde_json::from_str(json)?;
        if self.shuffle {
            match self.seed {
                Some(seed) => entries.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => entries.shuffle(&mut rng()),
            }
            debug!(seed = ?self.seed, "shuffled word list");
        }
        Ok(Vocabulary::new(entries)?)
    }
}
