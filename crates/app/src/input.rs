use services::SessionEvent;

/// A line typed at the quiz prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(SessionEvent),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line of user input.
///
/// Options are numbered from 1 on screen and forwarded 0-based.
/// `reshuffle` restarts with a fresh order; `restart` reuses `shuffle_default`.
pub fn parse_command(line: &str, shuffle_default: bool) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => Command::Event(SessionEvent::Select(index)),
            None => Command::Unknown(trimmed.to_string()),
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Event(SessionEvent::Next),
        "b" | "back" | "prev" => Command::Event(SessionEvent::Previous),
        "r" | "restart" => Command::Event(SessionEvent::Restart {
            rerandomize: shuffle_default,
        }),
        "s" | "reshuffle" => Command::Event(SessionEvent::Restart { rerandomize: true }),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

pub const HELP: &str = "\
Commands:
  <number>      choose an option
  n, next       go to the next question
  b, back       go to the previous question
  r, restart    start over
  s, reshuffle  start over in a new random order
  h, help       show this help
  q, quit       leave the quiz";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(
            parse_command("2", false),
            Command::Event(SessionEvent::Select(1))
        );
        assert_eq!(parse_command("0", false), Command::Unknown("0".into()));
    }

    #[test]
    fn navigation_words() {
        assert_eq!(parse_command(" next ", false), Command::Event(SessionEvent::Next));
        assert_eq!(parse_command("B", false), Command::Event(SessionEvent::Previous));
        assert_eq!(parse_command("q", false), Command::Quit);
        assert_eq!(parse_command("", false), Command::Empty);
    }

    #[test]
    fn restart_follows_shuffle_default() {
        assert_eq!(
            parse_command("r", true),
            Command::Event(SessionEvent::Restart { rerandomize: true })
        );
        assert_eq!(
            parse_command("restart", false),
            Command::Event(SessionEvent::Restart { rerandomize: false })
        );
        assert_eq!(
            parse_command("reshuffle", false),
            Command::Event(SessionEvent::Restart { rerandomize: true })
        );
    }

    #[test]
    fn garbage_is_unknown() {
        assert_eq!(parse_command("maybe", false), Command::Unknown("maybe".into()));
    }
}
