//! A console fed from a fixed script, for driving sessions in tests.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{Console, Prompt, Screen};
use crate::clock::ManualClock;
use crate::summary::format_clock;

enum Step {
    Line(String),
    Advance(Duration),
}

/// Replays scripted input lines and records a short tag for every screen.
/// `advance` steps move the shared clock just before the next line is read.
pub struct ScriptedConsole {
    steps: VecDeque<Step>,
    clock: Option<ManualClock>,
    screens: Vec<String>,
    prompts: Vec<Prompt>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            clock: None,
            screens: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::new()
        }
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps
            .extend(lines.into_iter().map(|line| Step::Line(line.into())));
        self
    }

    pub fn advance(mut self, by: Duration) -> Self {
        self.steps.push_back(Step::Advance(by));
        self
    }

    pub fn screens(&self) -> &[String] {
        &self.screens
    }

    pub fn continue_prompts(&self) -> usize {
        self.prompts
            .iter()
            .filter(|p| **p == Prompt::Continue)
            .count()
    }

    /// True once every scripted line has been consumed.
    pub fn is_exhausted(&self) -> bool {
        !self.steps.iter().any(|step| matches!(step, Step::Line(_)))
    }
}

impl Console for ScriptedConsole {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let tag = match screen {
            Screen::Welcome { .. } => "welcome".to_string(),
            Screen::Question {
                number,
                total,
                remaining,
                ..
            } => format!("question {}/{} {}", number, total, format_clock(remaining)),
            Screen::Feedback { question, choice } => {
                let verdict = if question.is_correct(choice) {
                    "correct"
                } else {
                    "incorrect"
                };
                format!("feedback {} {}", choice, verdict)
            }
            Screen::Skipped => "skipped".to_string(),
            Screen::InvalidInput => "invalid".to_string(),
            Screen::TimeUp => "time up".to_string(),
            Screen::UserQuit => "quit".to_string(),
            Screen::Results(_) => "results".to_string(),
        };
        self.screens.push(tag);
        Ok(())
    }

    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.prompts.push(prompt);
        if prompt == Prompt::Exit {
            return Ok(None);
        }

        while let Some(step) = self.steps.pop_front() {
            match step {
                Step::Advance(by) => {
                    if let Some(clock) = &self.clock {
                        clock.advance(by);
                    }
                }
                Step::Line(line) => return Ok(Some(line)),
            }
        }
        Ok(None)
    }
}
