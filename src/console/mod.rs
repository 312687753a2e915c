//! Front ends a session talks to.
//!
//! A session only ever shows a [`Screen`] and asks for a line of input, so
//! the plain line console and the full-screen terminal UI are
//! interchangeable.

mod line;
#[cfg(test)]
pub(crate) mod script;
mod tui;

use std::io;
use std::time::Duration;

use crate::models::{Choice, Question};
use crate::summary::QuizSummary;

pub use line::LineConsole;
pub use tui::TuiConsole;

pub const QUIZ_TITLE: &str = "FUNDAMENTALS OF AGENTIC AI QUIZ";

pub const INSTRUCTIONS: [&str; 5] = [
    "Read each question carefully",
    "Select the best answer (A, B, C, or D)",
    "You can type 'skip' to skip a question",
    "You can type 'quit' to exit early",
    "Timer will track your progress",
];

pub const STUDY_RESOURCES: [(&str, &str); 3] = [
    ("OpenAI Agents SDK", "https://openai.github.io/openai-agents-python/"),
    (
        "Prompting Guide",
        "https://cookbook.openai.com/examples/gpt4-1_prompting_guide",
    ),
    ("Markdown Guide", "https://www.markdownguide.org/basic-syntax/"),
];

/// What the player should currently see.
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Welcome {
        total: usize,
        time_budget: Duration,
    },
    Question {
        /// 1-based.
        number: usize,
        total: usize,
        remaining: Duration,
        question: &'a Question,
    },
    Feedback {
        question: &'a Question,
        choice: Choice,
    },
    Skipped,
    InvalidInput,
    TimeUp,
    UserQuit,
    Results(&'a QuizSummary),
}

/// Why input is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Acknowledge the welcome screen.
    Start,
    /// A/B/C/D, skip or quit.
    Answer,
    /// Acknowledge feedback before the next question.
    Continue,
    /// Results are shown. Consoles that keep nothing on screen after
    /// returning may answer immediately without reading.
    Exit,
}

pub trait Console {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()>;

    /// Reads one line of input. `None` means input has ended.
    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>>;
}
