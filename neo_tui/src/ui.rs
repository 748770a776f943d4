//! UI rendering

mod dashboard_view;
mod data_view;
mod defense_view;
mod help_view;
mod impact_view;
mod mission_view;
mod orbit_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Dashboard => dashboard_view::draw(f, app, chunks[1]),
        Tab::Impact => impact_view::draw(f, app, chunks[1]),
        Tab::Defense => defense_view::draw(f, app, chunks[1]),
        Tab::Mission => mission_view::draw(f, app, chunks[1]),
        Tab::Orbits => orbit_view::draw(f, app, chunks[1]),
        Tab::Data => data_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Dashboard => vec![("r", "Refresh"), ("s", "Alert status"), ("g", "Global view")],
        Tab::Impact => vec![("↑/↓", "Field"), ("←/→", "Adjust"), ("Enter", "Simulate")],
        Tab::Defense => vec![("↑/↓", "Field"), ("←/→", "Adjust"), ("Enter", "Deploy")],
        Tab::Mission => vec![("↑/↓", "Field"), ("←/→", "Adjust"), ("Enter", "Launch")],
        Tab::Orbits => vec![("↑/↓", "Zoom"), ("r", "Refresh")],
        Tab::Data => vec![("↑/↓", "Scroll quakes"), ("r", "Refresh")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = format!(" Meteor Madness | {} ", app.neo.origin.label());
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Horizontal text bar, `percent` of `width` filled
pub fn bar_line(label: &str, percent: f64, width: usize, color: Color) -> Line<'static> {
    let filled = ((percent / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    Line::from(vec![
        Span::styled(format!("{:18}", label), Style::default().fg(Color::Gray)),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {:5.1}%", percent), Style::default().fg(Color::White)),
    ])
}

pub fn value_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:24}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// One row of a form; the selected row is marked and highlighted
pub fn field_line(name: &str, value: String, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        (
            "▶ ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:24}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("◀ {} ▶", value), style),
    ])
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}
