//! Help tab view

use crate::app::App;
use crate::ui::section_header as heading;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("Navigation"),
        key_line("1-7", "Jump to tab (Dashboard/Impact/Defense/Mission/Orbits/Data/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll / zoom"),
        key_line("←/h  →/l", "Adjust selected field"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        heading("Dashboard"),
        key_line("r", "Refresh feeds and charts"),
        key_line("s", "Alert status"),
        key_line("g", "Global view (orbital map)"),
        Line::from(""),
        heading("Simulators"),
        key_line("Enter", "Simulate impact / deploy defense / launch mission"),
        Line::from(""),
        heading("Models"),
        Line::from(""),
        Line::from(Span::styled("Impact energy:", Style::default().fg(Color::Yellow))),
        Line::from("  E = ½ · ρ · (4/3)π(d/2)³ · v²,  Mt = E / 4.184e15 J"),
        Line::from("  Crater = 1.2 · d · (v/10) · sin(θ)"),
        Line::from("  Seismic = 4.5 + (log10(E) - 12) / 1.5"),
        Line::from("  Fireball = 50 · Mt^0.4 km,  Area = 3 · crater"),
        Line::from(""),
        Line::from(Span::styled("Defense success:", Style::default().fg(Color::Yellow))),
        Line::from("  rate = base · max(1 - size/2000, 0.1) · min(years/10, 1)"),
        Line::from("  clamped to [30%, 98%]"),
        Line::from(""),
    ];

    lines.push(Line::from(Span::styled(
        format!(
            "Config: feed window {} days, seismic limit {}, timeout {} s",
            app.config.api.feed_days, app.config.api.seismic_limit, app.config.api.timeout_secs
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Models "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
