use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::console::{INSTRUCTIONS, QUIZ_TITLE, STUDY_RESOURCES};

pub fn render(frame: &mut Frame, area: Rect, total: usize, time_budget: Duration) {
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, card, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(INSTRUCTIONS.len() as u16 + 15),
        Constraint::Fill(1),
    ])
    .areas(card);

    let mut lines = vec![
        Line::from(Span::styled(
            QUIZ_TITLE,
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered(),
        Line::from(
            format!(
                "{} questions  ·  {} minutes  ·  intermediate to advanced",
                total,
                time_budget.as_secs() / 60
            )
            .fg(Color::DarkGray),
        )
        .centered(),
        Line::from(STUDY_RESOURCES[0].1.fg(Color::DarkGray)).centered(),
        Line::from(""),
        Line::from("INSTRUCTIONS".fg(Color::Yellow).bold()),
    ];
    lines.extend(
        INSTRUCTIONS
            .into_iter()
            .map(|item| Line::from(vec![" • ".fg(Color::Yellow), item.fg(Color::Gray)])),
    );
    lines.extend([
        Line::from(""),
        Line::from(
            " The clock starts with the first question and is checked between questions."
                .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("ENTER", Style::default().fg(Color::Green).bold()),
            " start  ·  ".fg(Color::DarkGray),
            Span::styled("ESC", Style::default().fg(Color::Red).bold()),
            " leave".fg(Color::DarkGray),
        ])
        .centered(),
    ]);

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );

    frame.render_widget(widget, card);
}
