//! # agentic-quiz
//!
//! A timed multiple-choice quiz for the terminal. The built-in bank holds
//! 48 questions about building agents with the OpenAI Agents SDK.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentic_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::builtin(QuizConfig::default())?;
//!
//!     // Plain prompts on stdin/stdout
//!     let summary = quiz.run_in_terminal()?;
//!     println!("{}", summary.percentage_display());
//!
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod console;
mod data;
mod models;
pub mod session;
pub mod summary;
mod terminal;
mod ui;

use std::io;
use std::path::Path;

use log::info;
use thiserror::Error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::QuizConfig;
pub use console::{Console, LineConsole, Prompt, Screen, TuiConsole};
pub use data::{load_builtin_questions, load_questions_from_json, LoadError, QuestionBank};
pub use models::{AnswerRecord, Choice, Input, Question};
pub use session::{Phase, QuizSession, SessionState, Termination};
pub use summary::{CategoryStats, QuizSummary, Tier};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A configured quiz that can be played any number of times, each play
/// being a fresh session.
pub struct Quiz {
    bank: QuestionBank,
    config: QuizConfig,
}

impl Quiz {
    /// Validates `config` and trims the bank to the configured count.
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Result<Self, QuizError> {
        config.validate().map_err(QuizError::Config)?;
        let bank = bank.take(config.question_count)?;
        Ok(Self { bank, config })
    }

    pub fn builtin(config: QuizConfig) -> Result<Self, QuizError> {
        Self::new(QuestionBank::builtin()?, config)
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use agentic_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizConfig::default().with_question_count(10));
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        Self::new(QuestionBank::from_json(path)?, config)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// A fresh, not yet started session over this quiz.
    pub fn session(&self) -> QuizSession<'_> {
        QuizSession::new(&self.bank, self.config.clone())
    }

    /// Plays one session on `console` with the system clock.
    pub fn play<C: Console + ?Sized>(&self, console: &mut C) -> Result<QuizSummary, QuizError> {
        self.play_with_clock(console, SystemClock)
    }

    /// Welcome screen, the session itself, then the results screen.
    ///
    /// Ending input or typing `quit` on the welcome screen skips the
    /// session; the summary then reports nothing processed.
    pub fn play_with_clock<C, K>(&self, console: &mut C, clock: K) -> Result<QuizSummary, QuizError>
    where
        C: Console + ?Sized,
        K: Clock,
    {
        let mut session = QuizSession::with_clock(&self.bank, self.config.clone(), clock);

        console.render(Screen::Welcome {
            total: self.bank.len(),
            time_budget: self.config.time_budget,
        })?;
        let start = console.read_line(Prompt::Start)?;

        let summary = match start.as_deref().map(Input::parse) {
            None | Some(Some(Input::Quit)) => {
                info!("quiz left before the first question");
                session.finalize(0)
            }
            Some(_) => session.run(console)?,
        };

        console.render(Screen::Results(&summary))?;
        console.read_line(Prompt::Exit)?;
        Ok(summary)
    }

    /// Runs the quiz as plain prompts on stdin/stdout.
    pub fn run_in_terminal(&self) -> Result<QuizSummary, QuizError> {
        let mut console = LineConsole::stdio();
        self.play(&mut console)
    }

    /// Runs the quiz in the full-screen terminal UI. The terminal is
    /// restored before this returns.
    pub fn run_tui(&self) -> Result<QuizSummary, QuizError> {
        let mut console = TuiConsole::new()?;
        self.play(&mut console)
    }
}
