//! Impactor-2025 mission view

use crate::app::App;
use crate::ui::{field_line, section_header};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let params = &app.mission;
    let form = vec![
        section_header("Mission Parameters"),
        Line::from(""),
        field_line(
            "Days to Impact",
            params.days_to_impact.to_string(),
            app.mission_field == 0,
        ),
        field_line(
            "Asteroid Size",
            format!("{:.0} m", params.asteroid_size_m),
            app.mission_field == 1,
        ),
        field_line("Defense Budget", params.budget.to_string(), app.mission_field == 2),
        field_line("Defense Strategy", params.strategy.to_string(), app.mission_field == 3),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Launch defense mission",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(
        Paragraph::new(form).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Impactor-2025 Defense Mission "),
        ),
        chunks[0],
    );

    let report = match &app.mission_outcome {
        Some(outcome) => {
            let color = if outcome.is_success() {
                Color::Green
            } else {
                Color::Red
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    outcome.headline(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            lines.extend(
                outcome
                    .report()
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White)))),
            );
            lines
        }
        None => vec![Line::from(Span::styled(
            "Awaiting launch.",
            Style::default().fg(Color::Gray),
        ))],
    };
    f.render_widget(
        Paragraph::new(report).block(Block::default().borders(Borders::ALL).title(" Mission Report ")),
        chunks[1],
    );
}
