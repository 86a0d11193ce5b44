//! Hint derivation for the current word.
//!
//! An entry either carries an authored clue or gets a progressive letter
//! reveal built from its English word.

use std::fmt;

use crate::model::VocabularyEntry;

/// Character used for letters that are not revealed.
pub const MASK_CHAR: char = '_';

/// Display hint for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Authored clue from the word list.
    Clue(String),
    /// Letter reveal such as `AMB______`.
    Letters(String),
}

impl Hint {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Hint::Clue(text) | Hint::Letters(text) => text,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Picks the authored clue when present, otherwise the letter reveal.
#[must_use]
pub fn hint_for(entry: &VocabularyEntry) -> Hint {
    match entry.context_clue() {
        Some(clue) => Hint::Clue(clue.to_string()),
        None => Hint::Letters(letter_hint(entry.english())),
    }
}

/// Number of leading characters revealed for a word of `len` characters.
#[must_use]
pub fn revealed_len(len: usize) -> usize {
    let reveal = match len {
        0..=4 => 1,
        5..=6 => 2,
        _ => 3,
    };
    reveal.min(len)
}

/// Reveals the first 1, 2 or 3 characters (uppercased) and masks the rest.
///
/// Lengths are counted in chars, so `"työ"` is three characters long.
#[must_use]
pub fn letter_hint(word: &str) -> String {
    let len = word.chars().count();
    let reveal = revealed_len(len);

    let mut hint = String::with_capacity(word.len());
    for ch in word.chars().take(reveal) {
        hint.extend(ch.to_uppercase());
    }
    hint.extend(std::iter::repeat_n(MASK_CHAR, len - reveal));
    hint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn short_words_reveal_one_letter() {
        assert_eq!(letter_hint("cat"), "C__");
        assert_eq!(letter_hint("fish"), "F___");
        assert_eq!(letter_hint("a"), "A");
    }

    #[test]
    fn medium_words_reveal_two_letters() {
        assert_eq!(letter_hint("famous"), "FA____");
        assert_eq!(letter_hint("brave"), "BR___");
    }

    #[test]
    fn long_words_reveal_three_letters() {
        assert_eq!(letter_hint("ambitious"), "AMB______");
        assert_eq!(letter_hint("curious"), "CUR____");
    }

    #[test]
    fn empty_word_yields_empty_hint() {
        assert_eq!(letter_hint(""), "");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(letter_hint("työ"), "T__");
        assert_eq!(letter_hint("äiti"), "Ä___");
    }

    #[test]
    fn authored_clue_wins_over_letters() {
        let entry = VocabularyEntry::new("brave", "rohkea", Difficulty::Easy, "adjective", "A ___ knight.")
            .unwrap();
        assert_eq!(hint_for(&entry), Hint::Letters("BR___".into()));

        let entry = entry.with_context_clue("Not afraid");
        assert_eq!(hint_for(&entry), Hint::Clue("Not afraid".into()));
    }
}
