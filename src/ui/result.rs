use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::summary::{format_clock, QuizSummary, Tier};

pub fn render(frame: &mut Frame, area: Rect, summary: &QuizSummary) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], summary);
    render_category_breakdown(frame, chunks[2], summary);
    render_controls(frame, chunks[3]);
}

fn get_tier_color(tier: Option<Tier>) -> Color {
    match tier {
        Some(Tier::Excellent) => Color::Green,
        Some(Tier::Great) | Some(Tier::Good) => Color::Cyan,
        Some(Tier::KeepStudying) => Color::Yellow,
        Some(Tier::MorePracticeNeeded) | None => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &QuizSummary) {
    let tier_color = get_tier_color(summary.tier);
    let headline = summary.tier.map(Tier::headline).unwrap_or("No questions answered.");

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({})",
                summary.score,
                summary.questions_processed,
                summary.percentage_display()
            ),
            Style::default().fg(tier_color).bold(),
        )),
        Line::from(
            format!(
                "{} of {} processed  ·  {} skipped  ·  {}",
                summary.questions_processed,
                summary.total_questions,
                summary.questions_skipped,
                format_clock(summary.elapsed)
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(Span::styled(headline, Style::default().fg(tier_color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_category_breakdown(frame: &mut Frame, area: Rect, summary: &QuizSummary) {
    let decimals = summary.percentage_decimals as usize;
    let lines: Vec<Line> = summary
        .categories
        .iter()
        .map(|stats| {
            let color = match stats.indicator() {
                '+' => Color::Green,
                '~' => Color::Yellow,
                _ => Color::Red,
            };

            Line::from(vec![
                Span::styled(format!(" {} ", stats.indicator()), Style::default().fg(color)),
                Span::styled(
                    format!("{}: ", stats.category),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(
                        "{}/{} ({:.*}%)",
                        stats.correct,
                        stats.total,
                        decimals,
                        stats.percentage(summary.percentage_decimals)
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter or q to exit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
