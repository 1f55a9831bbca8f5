use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use quiz_core::model::{QuizSet, SessionSettings};
use services::{DispatchOutcome, QuizHost, QuizSession, load_quiz_set};

mod input;
mod logging;
mod render;

use input::{Command, HELP, parse_command};
use render::TextRenderer;

const SAMPLE_QUIZ: &str = include_str!("../assets/sample_quiz.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidMaxAttempts { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidMaxAttempts { raw } => {
                write!(f, "invalid --max-attempts value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--quiz <file.json>] [--shuffle] [--seed <n>] [--max-attempts <n>] [--no-back]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in sample quiz, canonical order, 2 attempts, back-navigation on");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE, QUIZ_SHUFFLE, QUIZ_SEED, QUIZ_MAX_ATTEMPTS, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    quiz_file: Option<PathBuf>,
    shuffle: bool,
    seed: Option<u64>,
    max_attempts: u32,
    allow_back: bool,
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let quiz_file = std::env::var("QUIZ_FILE").ok().map(PathBuf::from);
        let shuffle = std::env::var("QUIZ_SHUFFLE")
            .ok()
            .is_some_and(|value| is_truthy(&value));
        let seed = std::env::var("QUIZ_SEED").ok().map(parse_seed).transpose()?;
        let max_attempts = std::env::var("QUIZ_MAX_ATTEMPTS")
            .ok()
            .map(parse_max_attempts)
            .transpose()?
            .unwrap_or(SessionSettings::DEFAULT_MAX_WRONG_ATTEMPTS);

        Ok(Self {
            quiz_file,
            shuffle,
            seed,
            max_attempts,
            allow_back: true,
        })
    }

    /// Flags override the environment-derived `self`.
    fn parse(
        mut self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz" => {
                    self.quiz_file = Some(PathBuf::from(require_value(args, "--quiz")?));
                }
                "--shuffle" => self.shuffle = true,
                "--seed" => self.seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--max-attempts" => {
                    let value = require_value(args, "--max-attempts")?;
                    self.max_attempts = parse_max_attempts(value)?;
                }
                "--no-back" => self.allow_back = false,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Some(self))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_max_attempts(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ArgsError::InvalidMaxAttempts { raw }),
    }
}

fn load_quiz(path: Option<&PathBuf>) -> Result<QuizSet, Box<dyn std::error::Error>> {
    let quiz = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            load_quiz_set(&text)?
        }
        None => load_quiz_set(SAMPLE_QUIZ)?,
    };
    Ok(quiz)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::from_env()?.parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    let quiz = load_quiz(args.quiz_file.as_ref())?;
    let settings = SessionSettings::new(args.max_attempts, args.allow_back)?;
    let mut builder = QuizSession::builder(quiz)
        .with_randomize(args.shuffle)
        .with_settings(settings);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }

    // Single owned session; every stdin line is one event.
    let mut host = QuizHost::new(builder.start(), TextRenderer::new(io::stdout()));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match parse_command(&line, args.shuffle) {
            Command::Event(event) => {
                if let DispatchOutcome::Blocked(reason) = host.dispatch(event)? {
                    tracing::debug!(%reason, "event refused");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(raw) => println!("Unknown command: {raw} (h for help)"),
        }
    }

    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args {
            quiz_file: None,
            shuffle: false,
            seed: None,
            max_attempts: SessionSettings::DEFAULT_MAX_WRONG_ATTEMPTS,
            allow_back: true,
        }
    }

    fn parse(items: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = items.iter().map(|s| (*s).to_string());
        defaults().parse(&mut iter)
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--quiz", "q.json", "--shuffle", "--seed", "7", "--no-back"])
            .unwrap()
            .unwrap();
        assert_eq!(args.quiz_file, Some(PathBuf::from("q.json")));
        assert!(args.shuffle);
        assert_eq!(args.seed, Some(7));
        assert!(!args.allow_back);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help"]).unwrap(), None);
    }

    #[test]
    fn zero_max_attempts_is_rejected() {
        let err = parse(&["--max-attempts", "0"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidMaxAttempts { .. }));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse(&["--seed"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--seed" }));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("yes"));
        assert!(is_truthy(" 1 "));
        assert!(!is_truthy("nope"));
    }

    #[test]
    fn sample_quiz_loads() {
        let quiz = load_quiz(None).unwrap();
        assert_eq!(quiz.title(), "2D Animation Basics");
        assert_eq!(quiz.len(), 5);
    }
}
