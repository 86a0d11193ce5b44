use trainer_core::ScoringRules;

use super::test_harness::setup_trainer_harness;
use crate::vm::TrainerIntent;

#[test]
fn trainer_view_renders_first_word() {
    let harness = setup_trainer_harness(&[("cat", "kissa"), ("dog", "koira")], ScoringRules::default());
    let html = harness.render();

    assert!(html.contains("Score: 0"), "{html}");
    assert!(html.contains("Streak: 0"));
    assert!(html.contains("Word 1 / 2"));
    assert!(html.contains("kissa"));
    assert!(html.contains("The ___ is here."));
    assert!(html.contains("Show Hint (-5 pts)"));
}

#[test]
fn trainer_view_hides_feedback_and_next_before_answering() {
    let harness = setup_trainer_harness(&[("cat", "kissa")], ScoringRules::default());
    let html = harness.render();

    assert!(!html.contains("next-btn"));
    assert!(!html.contains("feedback"));
    assert!(!html.contains("game-complete"));
    assert!(!html.contains("Letter Hint"));
}

#[test]
fn trainer_view_uses_configured_penalty_in_hint_label() {
    let rules = ScoringRules::default().with_hint_penalty(2);
    let harness = setup_trainer_harness(&[("cat", "kissa")], rules);
    assert!(harness.render().contains("Show Hint (-2 pts)"));
}

#[test]
fn submitting_renders_tagged_feedback_and_next_button() {
    let mut harness =
        setup_trainer_harness(&[("cat", "kissa"), ("dog", "koira")], ScoringRules::default());

    harness.send(TrainerIntent::Submit(" Cat ".into()));
    let html = harness.render();
    assert!(html.contains("feedback feedback--correct"), "{html}");
    assert!(html.contains("Correct! Well done!"));
    assert!(html.contains("Score: 10"));
    assert!(html.contains("Streak: 1"));
    assert!(html.contains("next-btn"));
    assert!(html.contains("Next"));

    harness.send(TrainerIntent::Submit("kat".into()));
    let html = harness.render();
    assert!(html.contains("feedback feedback--incorrect"), "{html}");
    assert!(html.contains("The correct answer was: cat"));
    assert!(html.contains("Streak: 0"));
}

#[test]
fn hint_toggle_renders_letter_hint() {
    let mut harness = setup_trainer_harness(&[("cat", "kissa")], ScoringRules::default());

    harness.send(TrainerIntent::ToggleHint);
    let html = harness.render();
    assert!(html.contains("Letter Hint"), "{html}");
    assert!(html.contains("C__"));
    assert!(html.contains("Hide Hint"));

    harness.send(TrainerIntent::ToggleHint);
    assert!(!harness.render().contains("Letter Hint"));
}

#[test]
fn answering_last_word_disables_next_and_shows_completion() {
    let mut harness =
        setup_trainer_harness(&[("cat", "kissa"), ("dog", "koira")], ScoringRules::default());

    harness.send(TrainerIntent::Submit("cat".into()));
    harness.send(TrainerIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Word 2 / 2"), "{html}");
    assert!(html.contains("koira"));
    assert!(!html.contains("game-complete"));

    harness.send(TrainerIntent::Submit("fish".into()));
    let html = harness.render();
    assert!(html.contains("next-btn"), "{html}");
    assert!(html.contains("disabled"));
    assert!(html.contains("Finish"));
    assert!(html.contains("game-complete"));
    assert!(html.contains("50%"));
    assert!(html.contains("Words Learned"));
}

#[test]
fn reset_renders_first_word_again() {
    let mut harness =
        setup_trainer_harness(&[("cat", "kissa"), ("dog", "koira")], ScoringRules::default());

    harness.send(TrainerIntent::Submit("cat".into()));
    harness.send(TrainerIntent::Advance);
    harness.send(TrainerIntent::Reset);
    let html = harness.render();
    assert!(html.contains("Score: 0"), "{html}");
    assert!(html.contains("Word 1 / 2"));
    assert!(html.contains("kissa"));
    assert!(!html.contains("feedback"));
}
