use serde::Serialize;

use trainer_core::model::{SessionState, VocabularyEntry};

/// End-of-pass results, presentation-agnostic.
///
/// No pre-formatted strings; the UI decides how to show durations and
/// percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub score: u32,
    pub net_score: i64,
    pub words_learned: Vec<String>,
    pub longest_streak: u32,
    pub hints_used: u32,
    pub hint_penalty: u32,
    pub total_answered: u32,
    pub correct: u32,
    pub accuracy_percent: Option<u32>,
    pub average_answer_secs: Option<f64>,
    pub missed: Vec<VocabularyEntry>,
}

impl SessionSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_state(state: &SessionState) -> Self {
        let average_answer_secs = state
            .average_answer_time()
            .map(|avg| avg.num_milliseconds() as f64 / 1000.0);

        Self {
            score: state.current_score(),
            net_score: state.net_score(),
            words_learned: state.words_learned().to_vec(),
            longest_streak: state.longest_streak(),
            hints_used: state.hints_used(),
            hint_penalty: state.hint_penalty(),
            total_answered: state.total_words_answered(),
            correct: state.correct_answers(),
            accuracy_percent: state.accuracy_percent(),
            average_answer_secs,
            missed: state.incorrect_words().to_vec(),
        }
    }
}
