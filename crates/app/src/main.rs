mod play;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ScoringRules, SessionController, SessionError, VocabularyService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trainer_core::model::Vocabulary;
use trainer_core::scoring::DEFAULT_HINT_PENALTY;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "word-trainer", version, about = "Finnish to English vocabulary drills")]
struct Cli {
    /// JSON word list to drill instead of the bundled one.
    #[arg(long, env = "TRAINER_VOCAB_PATH", global = true)]
    vocab: Option<PathBuf>,
    /// Shuffle the word list before the session starts.
    ///
    /// From the environment, `0`, `false`, `no`, `off` and empty mean off.
    #[arg(
        long,
        env = "TRAINER_SHUFFLE",
        global = true,
        value_parser = FalseyValueParser::new()
    )]
    shuffle: bool,
    /// Seed for a reproducible shuffle. Implies `--shuffle`.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Points recorded per hint reveal.
    #[arg(long, env = "TRAINER_HINT_PENALTY", default_value_t = DEFAULT_HINT_PENALTY, global = true)]
    hint_penalty: u32,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop trainer (default).
    Ui,
    /// Drill in the terminal.
    Play {
        /// Print the final summary as JSON on stdout; the drill itself moves to stderr.
        #[arg(long)]
        json: bool,
        /// After the pass, drill the missed words once more.
        #[arg(long)]
        review: bool,
    },
}

impl Cli {
    fn vocabulary_service(&self) -> VocabularyService {
        let service = VocabularyService::new().with_shuffle(self.shuffle);
        match self.seed {
            Some(seed) => service.with_seed(seed),
            None => service,
        }
    }

    fn load_vocabulary(&self) -> Result<Vocabulary, services::VocabularyLoadError> {
        let service = self.vocabulary_service();
        match &self.vocab {
            Some(path) => service.load_path(path),
            None => service.load_bundled(),
        }
    }

    fn scoring_rules(&self) -> ScoringRules {
        ScoringRules::default().with_hint_penalty(self.hint_penalty)
    }
}

struct DesktopApp {
    vocabulary: Arc<Vocabulary>,
    rules: ScoringRules,
}

impl UiApp for DesktopApp {
    fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    fn scoring_rules(&self) -> ScoringRules {
        self.rules
    }
}

fn launch_desktop(vocabulary: Arc<Vocabulary>, rules: ScoringRules) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { vocabulary, rules });
    let context = build_app_context(&app);

    // Some dev setups open tao windows always-on-top unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Word Trainer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

/// Plays one pass, plus a mistake review when asked.
///
/// With `json`, the interactive drill is written to `stderr` and `stdout`
/// carries only the summary document.
fn play_session(
    session: &mut SessionController,
    mut input: impl BufRead,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
    json: bool,
    review: bool,
) -> Result<(), Box<dyn Error>> {
    let mut console: &mut dyn Write = if json { stderr } else { &mut *stdout };

    let summary = play::run(session, &mut input, &mut console)?;

    if review && session.is_complete() {
        match session.review_mistakes() {
            Ok(mut review_session) => {
                writeln!(
                    console,
                    "\nReviewing {} missed word(s).",
                    review_session.vocabulary().len()
                )?;
                play::run(&mut review_session, &mut input, &mut console)?;
            }
            Err(SessionError::NoMistakes) => writeln!(console, "\nNo mistakes to review.")?,
            Err(err) => return Err(err.into()),
        }
    }

    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
    }
    Ok(())
}

fn play_terminal(
    vocabulary: Arc<Vocabulary>,
    rules: ScoringRules,
    json: bool,
    review: bool,
) -> Result<(), Box<dyn Error>> {
    let mut session = SessionController::new(vocabulary).with_rules(rules);
    play_session(
        &mut session,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        json,
        review,
    )
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let vocabulary = Arc::new(cli.load_vocabulary()?);
    let rules = cli.scoring_rules();
    info!(
        words = vocabulary.len(),
        hint_penalty = rules.hint_penalty(),
        "vocabulary ready"
    );

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_desktop(vocabulary, rules);
            Ok(())
        }
        Command::Play { json, review } => play_terminal(vocabulary, rules, json, review),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::io::Cursor;

    use clap::CommandFactory;
    use clap::builder::TypedValueParser;
    use trainer_core::model::{Difficulty, VocabularyEntry};
    use trainer_core::time::fixed_clock;

    use super::*;

    fn cat_dog_session() -> SessionController {
        let entries = vec![
            VocabularyEntry::new("cat", "kissa", Difficulty::Easy, "noun", "The ___.").unwrap(),
            VocabularyEntry::new("dog", "koira", Difficulty::Easy, "noun", "The ___.").unwrap(),
        ];
        SessionController::new(Arc::new(Vocabulary::new(entries).unwrap()))
            .with_clock(fixed_clock())
    }

    #[test]
    fn json_mode_keeps_stdout_parseable() {
        let mut session = cat_dog_session();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        play_session(
            &mut session,
            Cursor::new("cat\n:hint\nfish\ncat\n"),
            &mut stdout,
            &mut stderr,
            true,
            true,
        )
        .unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&String::from_utf8(stdout).unwrap()).unwrap();
        assert_eq!(summary["score"], 10);
        assert_eq!(summary["hintsUsed"], 1);
        assert_eq!(summary["accuracyPercent"], 50);

        let console = String::from_utf8(stderr).unwrap();
        assert!(console.contains("Game complete!"), "{console}");
        assert!(console.contains("Reviewing 1 missed word(s)."));
    }

    #[test]
    fn text_mode_writes_drill_to_stdout() {
        let mut session = cat_dog_session();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        play_session(
            &mut session,
            Cursor::new("cat\ndog\n"),
            &mut stdout,
            &mut stderr,
            false,
            true,
        )
        .unwrap();

        let text = String::from_utf8(stdout).unwrap();
        assert!(text.contains("Game complete!"), "{text}");
        assert!(text.contains("No mistakes to review."));
        assert!(stderr.is_empty());
    }

    #[test]
    fn shuffle_flag_reads_numeric_env_values() {
        Cli::command().debug_assert();
        let cmd = Cli::command();
        let parser = FalseyValueParser::new();
        assert!(parser.parse_ref(&cmd, None, OsStr::new("1")).unwrap());
        assert!(!parser.parse_ref(&cmd, None, OsStr::new("0")).unwrap());
        assert!(Cli::try_parse_from(["word-trainer", "--shuffle"]).unwrap().shuffle);
    }

    #[test]
    fn defaults_to_ui_with_bundled_list() {
        let cli = Cli::try_parse_from(["word-trainer"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.hint_penalty, DEFAULT_HINT_PENALTY);
        assert_eq!(cli.load_vocabulary().unwrap().len(), 15);
    }

    #[test]
    fn play_accepts_global_flags() {
        let cli = Cli::try_parse_from([
            "word-trainer",
            "play",
            "--json",
            "--seed",
            "7",
            "--hint-penalty",
            "2",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                json: true,
                review: false
            })
        );
        assert_eq!(cli.scoring_rules().hint_penalty(), 2);

        let first = cli.load_vocabulary().unwrap();
        let second = cli.load_vocabulary().unwrap();
        assert_eq!(first.entries(), second.entries());
    }
}
