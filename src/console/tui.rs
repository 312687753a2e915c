//! Full-screen console built on crossterm and ratatui.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Console, Prompt, Screen};
use crate::terminal::TerminalGuard;
use crate::ui::{self, TuiState};

/// Maximum characters accepted on the input line.
const INPUT_LIMIT: usize = 16;

pub struct TuiConsole {
    guard: TerminalGuard,
    state: TuiState,
}

/// What a key press does to a pending read.
enum KeyOutcome {
    Pending,
    Submit(String),
    Close,
}

impl TuiConsole {
    /// Switches the terminal into the alternate screen. The previous mode
    /// comes back when the console is dropped.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            guard: TerminalGuard::enter()?,
            state: TuiState::new(),
        })
    }

    fn draw(&mut self) -> io::Result<()> {
        let state = &self.state;
        self.guard
            .terminal()
            .draw(|frame| ui::render(frame, state))?;
        Ok(())
    }
}

fn handle_key(state: &mut TuiState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Close;
    }

    match (state.prompt, key.code) {
        (_, KeyCode::Esc) => KeyOutcome::Close,
        (Prompt::Exit, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q')) => {
            KeyOutcome::Close
        }
        (Prompt::Exit, _) => KeyOutcome::Pending,
        (Prompt::Start | Prompt::Continue, KeyCode::Enter) => KeyOutcome::Submit(String::new()),
        (Prompt::Start | Prompt::Continue, _) => KeyOutcome::Pending,
        (Prompt::Answer, KeyCode::Enter) => KeyOutcome::Submit(std::mem::take(&mut state.input)),
        (Prompt::Answer, KeyCode::Backspace) => {
            state.input.pop();
            KeyOutcome::Pending
        }
        (Prompt::Answer, KeyCode::Char(c)) => {
            if state.input.chars().count() < INPUT_LIMIT {
                state.input.push(c);
            }
            KeyOutcome::Pending
        }
        _ => KeyOutcome::Pending,
    }
}

impl Console for TuiConsole {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        self.state.apply(screen);
        self.draw()
    }

    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.state.prompt = prompt;
        self.state.input.clear();

        loop {
            self.draw()?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_key(&mut self.state, key) {
                KeyOutcome::Pending => {}
                KeyOutcome::Submit(line) => return Ok(Some(line)),
                KeyOutcome::Close => return Ok(None),
            }
        }
    }
}
