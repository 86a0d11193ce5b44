//! Line-based drill over the same controller the desktop view drives.

use std::io::{self, BufRead, Write};

use services::{SessionController, SessionSummary};
use trainer_core::model::Outcome;

/// A parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Answer(String),
    Hint,
    Next,
    Reset,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":hint" | ":h" => Self::Hint,
            ":next" | ":n" => Self::Next,
            ":reset" => Self::Reset,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Answer(line.to_string()),
        }
    }
}

fn print_prompt(session: &SessionController, out: &mut impl Write) -> io::Result<()> {
    let progress = session.progress();
    let entry = session.current_entry();
    writeln!(out)?;
    writeln!(
        out,
        "Word {} / {}  |  Score: {}  |  Streak: {}",
        progress.position,
        progress.total,
        session.state().current_score(),
        session.state().streak()
    )?;
    writeln!(
        out,
        "{}  ({}, {})",
        entry.finnish(),
        entry.category(),
        entry.difficulty().label()
    )?;
    writeln!(out, "  {}", entry.context_sentence())?;
    write!(out, "> ")?;
    out.flush()
}

fn print_summary(summary: &SessionSummary, out: &mut impl Write) -> io::Result<()> {
    let accuracy = summary
        .accuracy_percent
        .map_or_else(|| "--".to_string(), |pct| format!("{pct}%"));
    writeln!(out)?;
    writeln!(out, "Game complete!")?;
    writeln!(out, "  Points:        {}", summary.score)?;
    writeln!(out, "  Words learned: {}", summary.words_learned.len())?;
    writeln!(out, "  Accuracy:      {accuracy}")?;
    writeln!(out, "  Longest streak: {}", summary.longest_streak)?;
    if summary.hints_used > 0 {
        writeln!(
            out,
            "  Hints used:    {} (penalty {}, net score {})",
            summary.hints_used, summary.hint_penalty, summary.net_score
        )?;
    }
    if !summary.missed.is_empty() {
        let missed = summary
            .missed
            .iter()
            .map(|entry| entry.english())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  Missed:        {missed}")?;
    }
    Ok(())
}

/// Run the drill until the list is finished, `:quit` is entered, or input ends.
///
/// Each word takes one answer; the drill moves on automatically afterwards.
///
/// # Errors
///
/// Returns I/O errors from reading `input` or writing `out`.
pub fn run(
    session: &mut SessionController,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<SessionSummary> {
    writeln!(
        out,
        "Type the English word. Commands: :hint, :next, :reset, :quit"
    )?;
    print_prompt(session, out)?;

    for line in input.lines() {
        match Command::parse(&line?) {
            Command::Quit => break,
            Command::Hint => {
                if session.toggle_hint() {
                    writeln!(out, "Hint: {}", session.hint())?;
                } else {
                    writeln!(out, "Hint hidden.")?;
                }
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }
            Command::Reset => {
                session.reset();
                writeln!(out, "Starting over.")?;
            }
            Command::Next => {
                if !session.advance() {
                    writeln!(out, "This is the last word.")?;
                }
            }
            Command::Answer(text) => {
                let feedback = session.submit_answer(&text);
                let icon = match feedback.outcome {
                    Outcome::Correct => "✅",
                    Outcome::Incorrect => "❌",
                };
                writeln!(out, "{icon} {}", feedback.message)?;
                if session.is_complete() {
                    break;
                }
                session.advance();
            }
        }
        print_prompt(session, out)?;
    }

    let summary = session.summary();
    if session.is_complete() {
        print_summary(&summary, out)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use trainer_core::model::{Difficulty, Vocabulary, VocabularyEntry};
    use trainer_core::time::fixed_clock;

    fn session() -> SessionController {
        let entries = ["cat", "dog"]
            .iter()
            .map(|w| VocabularyEntry::new(*w, "sana", Difficulty::Easy, "noun", "The ___.").unwrap())
            .collect();
        SessionController::new(Arc::new(Vocabulary::new(entries).unwrap())).with_clock(fixed_clock())
    }

    #[test]
    fn parses_commands_and_answers() {
        assert_eq!(Command::parse(" :hint "), Command::Hint);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(" Cat "), Command::Answer(" Cat ".into()));
    }

    #[test]
    fn plays_through_to_summary() {
        let mut session = session();
        let mut out = Vec::new();
        let summary = run(&mut session, Cursor::new("cat\n:hint\nfish\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Hint: D__"), "{text}");
        assert!(text.contains("sana  (noun, easy)"));
        assert!(text.contains("The correct answer was: dog"));
        assert!(text.contains("Accuracy:      50%"));
        assert_eq!(summary.score, 10);
        assert_eq!(summary.hints_used, 1);
        assert!(session.is_complete());
    }

    #[test]
    fn quit_stops_without_summary() {
        let mut session = session();
        let mut out = Vec::new();
        let summary = run(&mut session, Cursor::new("cat\n:quit\ndog\n"), &mut out).unwrap();

        assert_eq!(summary.total_answered, 1);
        assert!(!String::from_utf8(out).unwrap().contains("Game complete!"));
    }
}
