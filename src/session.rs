//! The quiz session state machine.
//!
//! A session makes one linear pass over the question bank:
//! `NotStarted -> Running -> Ended(..) -> Finalized`. The time budget is
//! checked before each question is shown (and optionally while an invalid
//! answer is being re-prompted); a pending read is never interrupted.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::Serialize;

use crate::QuizError;
use crate::clock::{Clock, SystemClock};
use crate::config::QuizConfig;
use crate::console::{Console, Prompt, Screen};
use crate::data::QuestionBank;
use crate::models::{AnswerRecord, Choice, Input, Question};
use crate::summary::QuizSummary;

/// Why a session stopped presenting questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Completed,
    UserQuit,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Ended(Termination),
    Finalized,
}

/// Mutable progress of one session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    started_at: Option<Instant>,
    correct: usize,
    answers: Vec<AnswerRecord>,
    termination: Option<Termination>,
}

impl SessionState {
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Records for processed questions, in bank order.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    fn record_answer(&mut self, question: &Question, choice: Choice) -> bool {
        self.answers.push(AnswerRecord::Answered(choice));
        let correct = question.is_correct(choice);
        if correct {
            self.correct += 1;
        }
        correct
    }

    fn record_skip(&mut self) {
        self.answers.push(AnswerRecord::Skipped);
    }
}

pub struct QuizSession<'a, K: Clock = SystemClock> {
    bank: &'a QuestionBank,
    config: QuizConfig,
    clock: K,
    state: SessionState,
    phase: Phase,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank, config: QuizConfig) -> Self {
        Self::with_clock(bank, config, SystemClock)
    }
}

impl<'a, K: Clock> QuizSession<'a, K> {
    pub fn with_clock(bank: &'a QuestionBank, config: QuizConfig, clock: K) -> Self {
        Self {
            bank,
            config,
            clock,
            state: SessionState::default(),
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        self.bank
    }

    /// Outcome for the question at `index`; anything past the processed
    /// prefix is `NotReached`.
    pub fn record(&self, index: usize) -> AnswerRecord {
        self.state
            .answers
            .get(index)
            .copied()
            .unwrap_or(AnswerRecord::NotReached)
    }

    /// Time left in the budget, or `None` once it is used up.
    pub fn remaining(&self) -> Option<Duration> {
        let elapsed = self.elapsed();
        self.config
            .time_budget
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    pub fn elapsed(&self) -> Duration {
        self.state
            .started_at
            .map(|start| self.clock.now().saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Presents questions until the bank is exhausted, the player quits, or
    /// the budget runs out, then finalizes.
    ///
    /// A session runs at most once; later calls only return the summary.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<QuizSummary, QuizError> {
        if self.phase != Phase::NotStarted {
            warn!("session already ran; returning its summary");
            return Ok(self.finalize(self.state.answers.len()));
        }

        self.state.started_at = Some(self.clock.now());
        self.phase = Phase::Running;
        info!(
            "session started: {} questions, {}s budget",
            self.bank.len(),
            self.config.time_budget.as_secs()
        );

        let termination = self.present_questions(console)?;
        self.state.termination = Some(termination);
        self.phase = Phase::Ended(termination);
        info!(
            "session ended ({:?}) after {} questions",
            termination,
            self.state.answers.len()
        );

        Ok(self.finalize(self.state.answers.len()))
    }

    fn present_questions<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<Termination, QuizError> {
        let bank = self.bank;
        let total = bank.len();

        for (index, question) in bank.iter().enumerate() {
            let Some(remaining) = self.remaining() else {
                debug!("time budget exhausted before question {}", index + 1);
                console.render(Screen::TimeUp)?;
                return Ok(Termination::TimedOut);
            };

            console.render(Screen::Question {
                number: index + 1,
                total,
                remaining,
                question,
            })?;

            let input = loop {
                let Some(line) = console.read_line(Prompt::Answer)? else {
                    debug!("input closed at question {}; treating as quit", index + 1);
                    break Input::Quit;
                };
                if let Some(input) = Input::parse(&line) {
                    break input;
                }

                console.render(Screen::InvalidInput)?;
                if self.config.recheck_deadline_on_retry && self.remaining().is_none() {
                    debug!("time budget exhausted while re-prompting question {}", index + 1);
                    console.render(Screen::TimeUp)?;
                    return Ok(Termination::TimedOut);
                }
            };

            match input {
                Input::Quit => {
                    console.render(Screen::UserQuit)?;
                    return Ok(Termination::UserQuit);
                }
                Input::Skip => {
                    self.state.record_skip();
                    console.render(Screen::Skipped)?;
                }
                Input::Answer(choice) => {
                    let correct = self.state.record_answer(question, choice);
                    debug!("question {} answered {} (correct: {})", index + 1, choice, correct);
                    console.render(Screen::Feedback { question, choice })?;
                }
            }

            if index + 1 < total {
                console.read_line(Prompt::Continue)?;
            }
        }

        Ok(Termination::Completed)
    }

    /// Computes the results over the first `processed` questions.
    pub fn finalize(&mut self, processed: usize) -> QuizSummary {
        let summary = QuizSummary::compute(
            self.bank,
            &self.state.answers,
            processed,
            self.elapsed(),
            self.state.termination,
            self.config.percentage_decimals,
        );
        if summary.questions_processed == self.state.answers.len() {
            debug_assert_eq!(summary.score, self.state.correct);
        }

        if self.phase != Phase::Finalized {
            info!(
                "session finalized: {}/{} correct ({})",
                summary.score,
                summary.questions_processed,
                summary.percentage_display()
            );
        }
        self.phase = Phase::Finalized;
        summary
    }
}
