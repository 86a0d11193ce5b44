use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("english word cannot be empty")]
    EmptyEnglish,

    #[error("finnish word cannot be empty")]
    EmptyFinnish,

    #[error("invalid difficulty level: {0} (expected 1, 2 or 3)")]
    InvalidDifficulty(u8),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-level difficulty tag carried by each entry.
///
/// Serialized as the numeric level (`1`, `2`, `3`) to match the word list format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Converts a numeric level (1-3) to a `Difficulty`.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::InvalidDifficulty` for values outside 1-3.
    pub fn from_level(level: u8) -> Result<Self, EntryError> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            _ => Err(EntryError::InvalidDifficulty(level)),
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EntryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_level(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.level()
    }
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// One Finnish/English vocabulary pair with its drill metadata.
///
/// Entries are loaded once and never mutated; the session only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    english: String,
    finnish: String,
    difficulty_level: Difficulty,
    category: String,
    context_sentence: String,
    #[serde(
        default,
        deserialize_with = "blank_clue_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    context_clue: Option<String>,
}

fn blank_clue_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let clue = Option::<String>::deserialize(deserializer)?;
    Ok(clue.filter(|clue| !clue.trim().is_empty()))
}

impl VocabularyEntry {
    /// Creates a validated entry.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyEnglish` or `EntryError::EmptyFinnish` for blank words.
    pub fn new(
        english: impl Into<String>,
        finnish: impl Into<String>,
        difficulty_level: Difficulty,
        category: impl Into<String>,
        context_sentence: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let entry = Self {
            english: english.into(),
            finnish: finnish.into(),
            difficulty_level,
            category: category.into(),
            context_sentence: context_sentence.into(),
            context_clue: None,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Attach an authored clue that replaces the generated letter hint.
    #[must_use]
    pub fn with_context_clue(mut self, clue: impl Into<String>) -> Self {
        let clue = clue.into();
        self.context_clue = if clue.trim().is_empty() {
            None
        } else {
            Some(clue)
        };
        self
    }

    /// Checks the invariants a deserialized entry must hold.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.english.trim().is_empty() {
            return Err(EntryError::EmptyEnglish);
        }
        if self.finnish.trim().is_empty() {
            return Err(EntryError::EmptyFinnish);
        }
        Ok(())
    }

    #[must_use]
    pub fn english(&self) -> &str {
        &self.english
    }

    #[must_use]
    pub fn finnish(&self) -> &str {
        &self.finnish
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty_level
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn context_sentence(&self) -> &str {
        &self.context_sentence
    }

    #[must_use]
    pub fn context_clue(&self) -> Option<&str> {
        self.context_clue.as_deref()
    }

    /// Returns true when `raw_input` matches the English word after case and
    /// whitespace folding.
    #[must_use]
    pub fn matches(&self, raw_input: &str) -> bool {
        normalize_answer(raw_input) == normalize_answer(&self.english)
    }
}

/// Folds an answer for comparison: surrounding whitespace trimmed, lowercased.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}
