use blogqa_core::feedback::Rating;

/// Slash commands offered for completion.
pub const COMMANDS: &[&str] = &[
    "/up", "/down", "/collection", "/history", "/clear", "/stats", "/help",
];

/// A parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line.
    Empty,
    Quit,
    /// Plain text to send as a question.
    Ask(String),
    /// Rate the n-th answer.
    Rate { number: usize, rating: Rating },
    /// Show (`None`) or switch the collection.
    Collection(Option<String>),
    History,
    Clear,
    Stats,
    Help,
    /// Malformed or unknown slash command, with a usage hint.
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed == "quit" || trimmed == "exit" {
            return Self::Quit;
        }
        if !trimmed.starts_with('/') {
            return Self::Ask(trimmed.to_string());
        }

        let mut parts = trimmed.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match name {
            "/up" => Self::parse_rate(arg, Rating::Up),
            "/down" => Self::parse_rate(arg, Rating::Down),
            "/collection" => Self::Collection(arg.map(str::to_string)),
            "/history" => Self::History,
            "/clear" => Self::Clear,
            "/stats" => Self::Stats,
            "/help" => Self::Help,
            other => Self::Invalid(format!("Unknown command: {other} (try /help)")),
        }
    }

    fn parse_rate(arg: Option<&str>, rating: Rating) -> Self {
        match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(number) if number > 0 => Self::Rate { number, rating },
            _ => Self::Invalid(format!("Usage: /{rating} <answer number>")),
        }
    }
}

pub const HELP: &str = "\
Type a question and press Enter to ask it.
  /up N, /down N     rate answer #N
  /collection [ID]   show or switch the collection
  /history           show the conversation
  /clear             start a new conversation
  /stats             show the admin dashboard
  quit, exit         leave";
