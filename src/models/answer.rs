use serde::Serialize;

use super::Choice;

/// A token typed at the answer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Answer(Choice),
    Skip,
    Quit,
}

impl Input {
    /// Parses a raw input line. Returns `None` for anything that should be
    /// re-prompted.
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.trim();
        if token.eq_ignore_ascii_case("skip") {
            Some(Input::Skip)
        } else if token.eq_ignore_ascii_case("quit") {
            Some(Input::Quit)
        } else {
            token.parse().ok().map(Input::Answer)
        }
    }
}

/// Outcome recorded for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerRecord {
    Answered(Choice),
    Skipped,
    NotReached,
}

impl AnswerRecord {
    pub fn choice(self) -> Option<Choice> {
        match self {
            AnswerRecord::Answered(choice) => Some(choice),
            _ => None,
        }
    }
}
