use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::command::COMMANDS;

/// Rustyline helper providing slash-command completion, highlighting and
/// hints. Collection ids are completed after `/collection `.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    collections: Vec<String>,
}

impl CliHelper {
    pub fn new(collections: Vec<String>) -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            collections,
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        if let Some(prefix) = line.strip_prefix("/collection ") {
            let start = line.len() - prefix.len();
            let matches = self
                .collections
                .iter()
                .filter(|id| id.starts_with(prefix))
                .cloned()
                .collect();
            return (start, matches);
        }

        if line.starts_with('/') && !line.contains(' ') {
            let matches = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .cloned()
                .collect();
            return (0, matches);
        }

        (0, Vec::new())
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];

        matches
            .into_iter()
            .find(|m| m.len() > typed.len())
            .map(|m| m[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}
