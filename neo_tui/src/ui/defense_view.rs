//! Planetary defense view

use crate::app::App;
use crate::ui::{field_line, section_header, value_line};
use neo_core::defense::group_thousands;
use neo_core::{DefenseStrategy, EarthSafety};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    draw_strategy_cards(f, app, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_simulation_form(f, app, cols[0]);
    draw_result(f, app, cols[1]);
}

fn draw_strategy_cards(f: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (card, strategy) in cards.iter().zip(DefenseStrategy::all()) {
        let selected = *strategy == app.defense.strategy;
        let border = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines = vec![
            Line::from(Span::styled(
                strategy.description(),
                Style::default().fg(Color::Gray),
            )),
            value_line("Success Rate", format!("{:.0}%", strategy.base_success() * 100.0)),
            value_line("Response Time", strategy.response_time().to_string()),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", strategy.name().to_uppercase())),
        );
        f.render_widget(paragraph, *card);
    }
}

fn draw_simulation_form(f: &mut Frame, app: &App, area: Rect) {
    let inputs = &app.defense;
    let lines = vec![
        section_header("Defense Simulation"),
        Line::from(""),
        field_line("Defense Strategy", inputs.strategy.to_string(), app.defense_field == 0),
        field_line(
            "Asteroid Size",
            format!("{:.0} m", inputs.asteroid_size_m),
            app.defense_field == 1,
        ),
        field_line(
            "Warning Time",
            format!("{:.0} years", inputs.warning_time_years),
            app.defense_field == 2,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Deploy defense",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Earth Protection Network "));
    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Deployment ");

    let Some(result) = &app.defense_result else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No defense deployed.",
            Style::default().fg(Color::Gray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let safety_color = match result.safety {
        EarthSafety::Guaranteed => Color::Green,
        EarthSafety::Probable => Color::Yellow,
        EarthSafety::Uncertain => Color::Red,
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Success Probability "))
        .gauge_style(Style::default().fg(safety_color))
        .ratio(result.success_rate.clamp(0.0, 1.0))
        .label(format!("{:.1}%", result.success_rate * 100.0));
    f.render_widget(gauge, chunks[0]);

    let lines = vec![
        Line::from(Span::styled(
            "DEFENSE DEPLOYED",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        value_line("Strategy", result.strategy.to_string()),
        value_line(
            "Estimated Miss Distance",
            format!("{} km", group_thousands(result.miss_distance_km)),
        ),
        Line::from(vec![
            Span::styled(format!("{:24}", "Earth Safety"), Style::default().fg(Color::Gray)),
            Span::styled(
                result.safety.label(),
                Style::default().fg(safety_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        value_line("Size factor", format!("{:.3}", result.size_factor)),
        value_line("Time factor", format!("{:.3}", result.time_factor)),
    ];
    f.render_widget(Paragraph::new(lines), chunks[1]);
}
