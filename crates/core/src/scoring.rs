/// Points awarded for a correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Penalty recorded each time a hint is opened.
pub const DEFAULT_HINT_PENALTY: u32 = 5;

/// Scoring knobs for a session.
///
/// The hint penalty is tracked in `SessionState::hint_penalty` and reported as
/// part of the net score; it is never subtracted from `current_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    points_per_correct: u32,
    hint_penalty: u32,
}

impl ScoringRules {
    #[must_use]
    pub fn new(points_per_correct: u32, hint_penalty: u32) -> Self {
        Self {
            points_per_correct,
            hint_penalty,
        }
    }

    #[must_use]
    pub fn with_hint_penalty(mut self, hint_penalty: u32) -> Self {
        self.hint_penalty = hint_penalty;
        self
    }

    #[must_use]
    pub fn points_per_correct(&self) -> u32 {
        self.points_per_correct
    }

    #[must_use]
    pub fn hint_penalty(&self) -> u32 {
        self.hint_penalty
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(POINTS_PER_CORRECT, DEFAULT_HINT_PENALTY)
    }
}

/// Percentage of correct answers, rounded half up.
///
/// Returns `None` when nothing has been answered yet.
#[must_use]
pub fn accuracy_percent(correct: u32, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    let rounded = (correct * 200 + total) / (total * 2);
    u32::try_from(rounded).ok()
}
