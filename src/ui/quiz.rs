use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{QuestionView, TuiState};
use crate::console::Prompt;
use crate::models::Choice;
use crate::summary::format_clock;

pub fn render(frame: &mut Frame, area: Rect, view: &QuestionView, state: &TuiState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], view);
    render_category(frame, chunks[1], &view.category);
    render_question_text(frame, chunks[2], view);
    render_options(frame, chunks[3], view);
    render_notes(frame, chunks[4], state);
    render_input(frame, chunks[5], state);
    render_controls(frame, chunks[6], state.prompt);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let progress = format!(
        "{}/{}  ·  {} left",
        view.number,
        view.total,
        format_clock(view.remaining)
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_category(frame: &mut Frame, area: Rect, category: &str) {
    let widget = Paragraph::new(category.to_uppercase()).fg(Color::Cyan);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let widget = Paragraph::new(format!("Q{}: {}", view.number, view.text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.options.len() * 2);

    for choice in Choice::ALL {
        let style = match view.chosen {
            Some(_) if choice == view.answer => Style::default().fg(Color::Green).bold(),
            Some(chosen) if chosen == choice => Style::default().fg(Color::Red).bold(),
            _ => Style::default().fg(Color::Gray),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", choice), style),
            Span::styled(view.options[choice.index()].as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_notes(frame: &mut Frame, area: Rect, state: &TuiState) {
    let lines: Vec<Line> = state
        .notes
        .iter()
        .map(|note| Line::from(Span::styled(note.text.as_str(), note.tone.color())))
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &TuiState) {
    let widget = Paragraph::new(format!("> {}_", state.input)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, prompt: Prompt) {
    let hint = match prompt {
        Prompt::Continue => "enter next question  ·  esc quit",
        _ => "a/b/c/d answer  ·  skip  ·  quit  ·  enter submit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
