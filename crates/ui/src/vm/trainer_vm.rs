use services::SessionController;
use trainer_core::Hint;
use trainer_core::model::Outcome;

/// The four user actions the trainer view forwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrainerIntent {
    Submit(String),
    ToggleHint,
    Advance,
    Reset,
}

impl TrainerIntent {
    /// Whether the answer field should be emptied after this intent.
    #[must_use]
    pub fn clears_input(&self) -> bool {
        matches!(self, TrainerIntent::Advance | TrainerIntent::Reset)
    }
}

/// Route an intent to the matching controller transition.
pub fn apply_intent(session: &mut SessionController, intent: TrainerIntent) {
    match intent {
        TrainerIntent::Submit(text) => {
            session.submit_answer(&text);
        }
        TrainerIntent::ToggleHint => {
            session.toggle_hint();
        }
        TrainerIntent::Advance => {
            session.advance();
        }
        TrainerIntent::Reset => session.reset(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintVm {
    pub title: &'static str,
    pub text: String,
    pub monospace: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub icon: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub points: u32,
    pub words_learned: usize,
    pub accuracy_label: String,
}

/// Everything the trainer view renders, precomputed from the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerVm {
    pub score_label: String,
    pub streak_label: String,
    pub streak_active: bool,
    pub progress_label: String,
    pub finnish: String,
    pub category: String,
    pub difficulty: &'static str,
    pub context_sentence: String,
    pub hint_button_label: String,
    pub hint: Option<HintVm>,
    pub feedback: Option<FeedbackVm>,
    pub next_disabled: bool,
    pub next_label: &'static str,
    pub completion: Option<CompletionVm>,
}

impl TrainerVm {
    #[must_use]
    pub fn from_session(session: &SessionController) -> Self {
        let state = session.state();
        let entry = session.current_entry();
        let progress = session.progress();

        let hint = session.visible_hint().map(|hint| match hint {
            Hint::Clue(text) => HintVm {
                title: "Clue",
                text,
                monospace: false,
            },
            Hint::Letters(text) => HintVm {
                title: "Letter Hint",
                text,
                monospace: true,
            },
        });
        let hint_button_label = if state.show_hint() {
            "Hide Hint".to_string()
        } else {
            format!("Show Hint (-{} pts)", session.rules().hint_penalty())
        };

        // Styling follows the tagged outcome, never the message text.
        let feedback = state.last_feedback().map(|feedback| match feedback.outcome {
            Outcome::Correct => FeedbackVm {
                class: "feedback feedback--correct",
                icon: "✅",
                message: feedback.message.clone(),
            },
            Outcome::Incorrect => FeedbackVm {
                class: "feedback feedback--incorrect",
                icon: "❌",
                message: feedback.message.clone(),
            },
        });

        let completion = session.is_complete().then(|| CompletionVm {
            points: state.current_score(),
            words_learned: state.words_learned().len(),
            accuracy_label: session
                .accuracy_percent()
                .map_or_else(|| "--".to_string(), |pct| format!("{pct}%")),
        });

        let is_last = progress.is_last_word();

        Self {
            score_label: format!("Score: {}", state.current_score()),
            streak_label: format!("Streak: {}", state.streak()),
            streak_active: state.streak() > 0,
            progress_label: format!("Word {} / {}", progress.position, progress.total),
            finnish: entry.finnish().to_string(),
            category: entry.category().to_string(),
            difficulty: entry.difficulty().label(),
            context_sentence: entry.context_sentence().to_string(),
            hint_button_label,
            hint,
            feedback,
            next_disabled: is_last,
            next_label: if is_last { "Finish" } else { "Next" },
            completion,
        }
    }

    /// The advance control only appears once the current word has feedback.
    #[must_use]
    pub fn shows_next(&self) -> bool {
        self.feedback.is_some()
    }
}
