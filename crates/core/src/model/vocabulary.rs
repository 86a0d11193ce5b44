use std::ops::Index;
use std::slice;

use serde::Serialize;
use thiserror::Error;

use crate::model::entry::{EntryError, VocabularyEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("vocabulary must contain at least one entry")]
    Empty,

    #[error("entry {index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: EntryError,
    },
}

/// Ordered, non-empty word list a session steps through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Builds a vocabulary from already-ordered entries.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` for an empty list and
    /// `VocabularyError::InvalidEntry` if any entry fails validation.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|source| VocabularyError::InvalidEntry { index, source })?;
        }
        Ok(Self { entries })
    }

    /// Distinct entries in first-seen order, keyed by their English word.
    ///
    /// Used to turn a list of misses (which may repeat) into a review list.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` if `entries` is empty.
    pub fn distinct(entries: &[VocabularyEntry]) -> Result<Self, VocabularyError> {
        let mut unique: Vec<VocabularyEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|seen| seen.english() == entry.english()) {
                unique.push(entry.clone());
            }
        }
        Self::new(unique)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VocabularyEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, VocabularyEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }
}

impl Index<usize> for Vocabulary {
    type Output = VocabularyEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabularyEntry;
    type IntoIter = slice::Iter<'a, VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
