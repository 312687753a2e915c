//! Full-screen rendering for the terminal UI.
//!
//! [`TuiState`] is what the screen shows; it is updated from session
//! screens and drawn by [`render`].

mod quiz;
mod result;
mod welcome;

use std::time::Duration;

use ratatui::{prelude::*, widgets::Block};

use crate::console::{Prompt, Screen};
use crate::models::{Choice, Question};
use crate::summary::QuizSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Good,
    Bad,
    Warning,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Neutral => Color::Gray,
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
            Tone::Warning => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub remaining: Duration,
    pub category: String,
    pub text: String,
    pub options: [String; 4],
    pub answer: Choice,
    /// Set once the player has committed to an option.
    pub chosen: Option<Choice>,
}

impl QuestionView {
    fn new(number: usize, total: usize, remaining: Duration, question: &Question) -> Self {
        Self {
            number,
            total,
            remaining,
            category: question.category.clone(),
            text: question.text.clone(),
            options: question.options.clone(),
            answer: question.answer,
            chosen: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum View {
    Welcome { total: usize, time_budget: Duration },
    Question(QuestionView),
    Results(Box<QuizSummary>),
}

#[derive(Debug, Clone)]
pub struct TuiState {
    pub view: View,
    pub notes: Vec<Note>,
    pub input: String,
    pub prompt: Prompt,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            view: View::Welcome {
                total: 0,
                time_budget: Duration::ZERO,
            },
            notes: Vec::new(),
            input: String::new(),
            prompt: Prompt::Start,
        }
    }

    pub fn apply(&mut self, screen: Screen<'_>) {
        match screen {
            Screen::Welcome { total, time_budget } => {
                self.view = View::Welcome { total, time_budget };
                self.notes.clear();
            }
            Screen::Question {
                number,
                total,
                remaining,
                question,
            } => {
                self.view = View::Question(QuestionView::new(number, total, remaining, question));
                self.notes.clear();
            }
            Screen::Feedback { question, choice } => {
                if let View::Question(view) = &mut self.view {
                    view.chosen = Some(choice);
                }
                if question.is_correct(choice) {
                    self.note("Correct!", Tone::Good);
                } else {
                    self.note(
                        format!("Incorrect. The correct answer was {}.", question.answer),
                        Tone::Bad,
                    );
                }
                self.note(question.explanation.clone(), Tone::Neutral);
            }
            Screen::Skipped => self.note("Question skipped.", Tone::Warning),
            Screen::InvalidInput => {
                self.note("Type A, B, C, D, skip or quit.", Tone::Warning)
            }
            Screen::TimeUp => self.note("TIME'S UP! Quiz completed.", Tone::Bad),
            Screen::UserQuit => self.note("Quiz terminated by user.", Tone::Warning),
            Screen::Results(summary) => {
                self.view = View::Results(Box::new(summary.clone()));
                self.notes.clear();
            }
        }
    }

    fn note(&mut self, text: impl Into<String>, tone: Tone) {
        let text = text.into();
        // Repeated invalid input should not grow the list.
        if self.notes.last().is_some_and(|n| n.text == text) {
            return;
        }
        self.notes.push(Note { text, tone });
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &state.view {
        View::Welcome { total, time_budget } => {
            welcome::render(frame, area, *total, *time_budget)
        }
        View::Question(view) => quiz::render(frame, area, view, state),
        View::Results(summary) => result::render(frame, area, summary),
    }
}
