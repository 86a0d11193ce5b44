use dioxus::prelude::*;
use services::SessionController;

use crate::context::AppContext;
use crate::vm::{CompletionVm, TrainerIntent, TrainerVm, apply_intent};

/// Signals backing the trainer view plus the intent dispatcher that mutates them.
#[derive(Clone, Copy)]
pub(crate) struct TrainerState {
    pub session: Signal<SessionController>,
    pub answer: Signal<String>,
    pub dispatch: Callback<TrainerIntent>,
}

pub(crate) fn use_trainer_state() -> TrainerState {
    let ctx = use_context::<AppContext>();
    let session = use_signal(move || ctx.start_session());
    let answer = use_signal(String::new);

    let dispatch = use_callback(move |intent: TrainerIntent| {
        let mut session = session;
        let mut answer = answer;
        let clears_input = intent.clears_input();
        apply_intent(&mut session.write(), intent);
        if clears_input {
            answer.set(String::new());
        }
    });

    TrainerState {
        session,
        answer,
        dispatch,
    }
}

#[component]
pub fn TrainerView() -> Element {
    let trainer = use_trainer_state();
    render_trainer(trainer)
}

pub(crate) fn render_trainer(trainer: TrainerState) -> Element {
    let TrainerState {
        session,
        mut answer,
        dispatch,
    } = trainer;

    let vm = TrainerVm::from_session(&session.read());
    let current_answer = answer();
    let streak_class = if vm.streak_active {
        "trainer-stat trainer-stat--hot"
    } else {
        "trainer-stat"
    };
    let hint_text_class = match vm.hint.as_ref() {
        Some(hint) if !hint.monospace => "trainer-hint__clue",
        _ => "trainer-hint__text",
    };
    let show_next = vm.shows_next();
    let next_disabled = vm.next_disabled;
    let next_label = vm.next_label;

    rsx! {
        div { class: "page trainer",
            header { class: "trainer-header",
                h1 { class: "trainer-title", "Word Trainer" }
                div { class: "trainer-stats",
                    span { class: "trainer-stat", id: "score", "{vm.score_label}" }
                    span { class: "{streak_class}", id: "streak", "{vm.streak_label}" }
                    span { class: "trainer-stat", id: "progress", "{vm.progress_label}" }
                }
            }
            main { class: "trainer-main",
                div { class: "trainer-card",
                    h2 { class: "trainer-prompt", "📝 Complete the sentence:" }
                    p { class: "trainer-sentence", id: "context-sentence", "“{vm.context_sentence}”" }
                    div { class: "trainer-word",
                        span { class: "trainer-finnish", "🇫🇮 {vm.finnish}" }
                        span { class: "trainer-category", "{vm.category}" }
                        span { class: "trainer-difficulty", id: "difficulty", "{vm.difficulty}" }
                    }
                    if let Some(hint) = vm.hint.clone() {
                        div { class: "trainer-hint", id: "hint",
                            strong { "💡 {hint.title}:" }
                            div { class: "{hint_text_class}", "{hint.text}" }
                        }
                    }
                }

                div { class: "trainer-answer",
                    input {
                        class: "trainer-input",
                        id: "answer-input",
                        r#type: "text",
                        placeholder: "Type your answer in English...",
                        value: "{current_answer}",
                        oninput: move |evt| answer.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.data.key() == Key::Enter {
                                evt.prevent_default();
                                dispatch.call(TrainerIntent::Submit(answer()));
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        id: "submit-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(TrainerIntent::Submit(answer())),
                        "✅ Submit"
                    }
                }

                if let Some(feedback) = vm.feedback.clone() {
                    div { class: "{feedback.class}", id: "feedback",
                        "{feedback.icon} {feedback.message}"
                    }
                }

                div { class: "trainer-actions",
                    button {
                        class: "btn btn-hint",
                        id: "hint-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(TrainerIntent::ToggleHint),
                        "{vm.hint_button_label}"
                    }
                    if show_next {
                        button {
                            class: "btn btn-next",
                            id: "next-btn",
                            r#type: "button",
                            disabled: next_disabled,
                            onclick: move |_| dispatch.call(TrainerIntent::Advance),
                            "{next_label}"
                        }
                    }
                    button {
                        class: "btn btn-reset",
                        id: "reset-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(TrainerIntent::Reset),
                        "Reset"
                    }
                }

                if let Some(completion) = vm.completion.clone() {
                    CompletionPanel { completion }
                }
            }
        }
    }
}

#[component]
fn CompletionPanel(completion: CompletionVm) -> Element {
    rsx! {
        div { class: "game-complete", id: "game-complete",
            h2 { class: "game-complete__title", "🎉 Excellent! Game Complete! 🎉" }
            div { class: "game-complete__grid",
                CompletionStat { icon: "🏆", value: completion.points.to_string(), label: "Points" }
                CompletionStat {
                    icon: "📚",
                    value: completion.words_learned.to_string(),
                    label: "Words Learned",
                }
                CompletionStat {
                    icon: "🎯",
                    value: completion.accuracy_label.clone(),
                    label: "Accuracy",
                }
            }
        }
    }
}

#[component]
fn CompletionStat(icon: &'static str, value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "game-complete__stat",
            div { class: "game-complete__icon", "{icon}" }
            div { class: "game-complete__value", "{value}" }
            div { class: "game-complete__label", "{label}" }
        }
    }
}
