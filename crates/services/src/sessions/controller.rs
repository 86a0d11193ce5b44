use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use trainer_core::model::{Feedback, SessionState, Vocabulary, VocabularyEntry};
use trainer_core::{Clock, Hint, ScoringRules, hint_for};

use super::progress::SessionProgress;
use super::summary::SessionSummary;
use crate::error::SessionError;

//
// ─── SESSION CONTROLLER ────────────────────────────────────────────────────────
//

/// Owns one pass through a vocabulary: the word list, the score state and the
/// timer for the current word.
///
/// Every transition runs to completion synchronously; the only writer is
/// whoever holds `&mut self`.
pub struct SessionController {
    vocabulary: Arc<Vocabulary>,
    rules: ScoringRules,
    clock: Clock,
    state: SessionState,
    word_started_at: DateTime<Utc>,
}

impl SessionController {
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        let clock = Clock::default();
        Self {
            vocabulary,
            rules: ScoringRules::default(),
            word_started_at: clock.now(),
            clock,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    /// Use `clock` for answer timing. Restarts the timer of the current word.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.word_started_at = clock.now();
        self
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    #[must_use]
    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access to the clock, for driving a fixed clock in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn current_entry(&self) -> &VocabularyEntry {
        &self.vocabulary[self.state.current_word_index()]
    }

    /// Hint for the current word, whether or not it is shown.
    #[must_use]
    pub fn hint(&self) -> Hint {
        hint_for(self.current_entry())
    }

    /// Hint for the current word while the hint is toggled on.
    #[must_use]
    pub fn visible_hint(&self) -> Option<Hint> {
        self.state.show_hint().then(|| self.hint())
    }

    /// Grade the learner's input against the current word.
    pub fn submit_answer(&mut self, raw_input: &str) -> Feedback {
        let elapsed = self.clock.elapsed_since(self.word_started_at);
        let index = self.state.current_word_index();
        let entry = &self.vocabulary[index];
        let feedback = self
            .state
            .submit_answer(entry, raw_input, &self.rules, elapsed)
            .clone();
        debug!(
            index,
            outcome = ?feedback.outcome,
            score = self.state.current_score(),
            streak = self.state.streak(),
            "answer submitted"
        );
        feedback
    }

    /// Show or hide the hint. Returns the new visibility.
    pub fn toggle_hint(&mut self) -> bool {
        let shown = self.state.toggle_hint(&self.rules);
        debug!(
            shown,
            hints_used = self.state.hints_used(),
            hint_penalty = self.state.hint_penalty(),
            "hint toggled"
        );
        shown
    }

    /// Move to the next word. Returns false at the last word.
    pub fn advance(&mut self) -> bool {
        let moved = self.state.advance(self.vocabulary.len());
        if moved {
            self.word_started_at = self.clock.now();
            debug!(index = self.state.current_word_index(), "advanced to next word");
        }
        moved
    }

    /// Start over from the first word with all counters cleared.
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        self.word_started_at = self.clock.now();
        info!(words = self.vocabulary.len(), "session reset");
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(self.vocabulary.len())
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        self.state.accuracy_percent()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.state.current_word_index() + 1,
            total: self.vocabulary.len(),
            answered: self.state.total_words_answered(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(&self.state)
    }

    /// New session over the distinct words missed so far, in first-miss order.
    ///
    /// Keeps the scoring rules and clock of this session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoMistakes` when every answer was correct.
    pub fn review_mistakes(&self) -> Result<Self, SessionError> {
        let missed = self.state.incorrect_words();
        if missed.is_empty() {
            return Err(SessionError::NoMistakes);
        }
        let vocabulary = Vocabulary::distinct(missed)?;
        info!(words = vocabulary.len(), "starting mistake review");
        Ok(Self::new(Arc::new(vocabulary))
            .with_rules(self.rules)
            .with_clock(self.clock))
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("vocabulary_len", &self.vocabulary.len())
            .field("index", &self.state.current_word_index())
            .field("score", &self.state.current_score())
            .field("streak", &self.state.streak())
            .field("answered", &self.state.total_words_answered())
            .field("word_started_at", &self.word_started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
