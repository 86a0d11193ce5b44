use chrono::Duration;

use crate::model::entry::VocabularyEntry;
use crate::scoring::{ScoringRules, accuracy_percent};

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Which way the last submission went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Message shown after a submission, tagged with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub message: String,
}

impl Feedback {
    #[must_use]
    pub fn correct() -> Self {
        Self {
            outcome: Outcome::Correct,
            message: "Correct! Well done!".to_string(),
        }
    }

    #[must_use]
    pub fn incorrect(expected: &str) -> Self {
        Self {
            outcome: Outcome::Incorrect,
            message: format!("Incorrect. The correct answer was: {expected}"),
        }
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Score, streak and progress for one pass through a vocabulary.
///
/// Transitions take the entry or list length they need as arguments so the
/// state stays a plain value; the services layer owns the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_score: u32,
    streak: u32,
    longest_streak: u32,
    words_learned: Vec<String>,
    incorrect_words: Vec<VocabularyEntry>,
    hints_used: u32,
    hint_penalty: u32,
    total_words_answered: u32,
    correct_answers: u32,
    current_word_index: usize,
    show_hint: bool,
    last_feedback: Option<Feedback>,
    answer_time_total: Duration,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh state at the first word with every counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_score: 0,
            streak: 0,
            longest_streak: 0,
            words_learned: Vec::new(),
            incorrect_words: Vec::new(),
            hints_used: 0,
            hint_penalty: 0,
            total_words_answered: 0,
            correct_answers: 0,
            current_word_index: 0,
            show_hint: false,
            last_feedback: None,
            answer_time_total: Duration::zero(),
        }
    }

    /// Grade `raw_input` against `entry` and update score and streak.
    ///
    /// `elapsed` is the time spent on the word; negative values count as zero.
    /// Always counts as an answer and always hides the hint.
    pub fn submit_answer(
        &mut self,
        entry: &VocabularyEntry,
        raw_input: &str,
        rules: &ScoringRules,
        elapsed: Duration,
    ) -> &Feedback {
        let feedback = if entry.matches(raw_input) {
            self.current_score = self
                .current_score
                .saturating_add(rules.points_per_correct());
            self.streak = self.streak.saturating_add(1);
            self.longest_streak = self.longest_streak.max(self.streak);
            self.correct_answers = self.correct_answers.saturating_add(1);
            if !self.words_learned.iter().any(|word| word == entry.english()) {
                self.words_learned.push(entry.english().to_string());
            }
            Feedback::correct()
        } else {
            self.streak = 0;
            self.incorrect_words.push(entry.clone());
            Feedback::incorrect(entry.english())
        };

        self.total_words_answered = self.total_words_answered.saturating_add(1);
        self.answer_time_total += elapsed.max(Duration::zero());
        self.show_hint = false;
        self.last_feedback.insert(feedback)
    }

    /// Flip hint visibility, charging the penalty when it opens.
    ///
    /// Returns the new visibility.
    pub fn toggle_hint(&mut self, rules: &ScoringRules) -> bool {
        self.show_hint = !self.show_hint;
        if self.show_hint {
            self.hints_used = self.hints_used.saturating_add(1);
            self.hint_penalty = self.hint_penalty.saturating_add(rules.hint_penalty());
        }
        self.show_hint
    }

    /// Move to the next word of a list with `vocabulary_len` entries.
    ///
    /// Returns false, leaving the state untouched, when already at the last word.
    pub fn advance(&mut self, vocabulary_len: usize) -> bool {
        if self.current_word_index + 1 >= vocabulary_len {
            return false;
        }
        self.current_word_index += 1;
        self.last_feedback = None;
        self.show_hint = false;
        true
    }

    /// True once the last word of the list has been answered.
    #[must_use]
    pub fn is_complete(&self, vocabulary_len: usize) -> bool {
        self.current_word_index + 1 >= vocabulary_len && self.is_answered()
    }

    /// True when the current word already has feedback.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.last_feedback.is_some()
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        accuracy_percent(self.correct_answers, self.total_words_answered)
    }

    /// Score after subtracting the tracked hint penalty. May be negative.
    #[must_use]
    pub fn net_score(&self) -> i64 {
        i64::from(self.current_score) - i64::from(self.hint_penalty)
    }

    /// Mean time per answer, or `None` before the first submission.
    #[must_use]
    pub fn average_answer_time(&self) -> Option<Duration> {
        if self.total_words_answered == 0 {
            return None;
        }
        let count = i32::try_from(self.total_words_answered).unwrap_or(i32::MAX);
        Some(self.answer_time_total / count)
    }

    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    #[must_use]
    pub fn words_learned(&self) -> &[String] {
        &self.words_learned
    }

    #[must_use]
    pub fn incorrect_words(&self) -> &[VocabularyEntry] {
        &self.incorrect_words
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub fn hint_penalty(&self) -> u32 {
        self.hint_penalty
    }

    #[must_use]
    pub fn total_words_answered(&self) -> u32 {
        self.total_words_answered
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    #[must_use]
    pub fn answer_time_total(&self) -> Duration {
        self.answer_time_total
    }
}
