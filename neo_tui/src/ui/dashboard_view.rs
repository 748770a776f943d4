//! Real-time monitoring dashboard

use crate::app::App;
use log::Level;
use neo_core::analytics::illustrative::THREAT_LEVELS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Metric cards
            Constraint::Percentage(50), // Charts, first row
            Constraint::Percentage(50), // Charts, second row
            Constraint::Length(8),      // Event log
        ])
        .split(area);

    draw_metric_cards(f, app, rows[0]);

    let top = split_columns(rows[1]);
    draw_velocity_chart(f, app, top[0]);
    draw_threat_levels(f, top[1]);

    let bottom = split_columns(rows[2]);
    draw_timeline(f, app, bottom[0]);
    draw_size_scatter(f, app, bottom[1]);

    draw_event_log(f, app, rows[3]);
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_metric_cards(f: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let metrics = [
        ("TOTAL OBJECTS", app.summary.total_objects.to_string(), "Tracked objects"),
        ("HAZARDOUS", app.summary.hazardous.to_string(), "Potential threats"),
        ("CLOSE APPROACH", app.summary.close_approaches.to_string(), "This week"),
        ("DEFENSE READY", "100%".to_string(), "Systems online"),
    ];

    for (card, (title, value, subtitle)) in cards.iter().zip(metrics) {
        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));
        f.render_widget(paragraph, *card);
    }
}

fn draw_velocity_chart(f: &mut Frame, app: &App, area: Rect) {
    let data: Vec<(&str, u64)> = app
        .series
        .velocity
        .iter()
        .map(|(label, count)| (label.trim_end_matches(" km/s"), *count as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Asteroid Velocity Distribution (km/s) "),
        )
        .data(data.as_slice())
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    f.render_widget(chart, area);
}

fn draw_threat_levels(f: &mut Frame, area: Rect) {
    let total: u32 = THREAT_LEVELS.iter().map(|(_, n)| n).sum();
    let colors = [Color::Green, Color::Yellow, Color::LightRed, Color::Red];

    let mut lines = vec![Line::from("")];
    for ((label, count), color) in THREAT_LEVELS.iter().zip(colors) {
        let percent = *count as f64 / total as f64 * 100.0;
        let width = area.width.saturating_sub(30) as usize;
        lines.push(crate::ui::bar_line(label, percent, width, color));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Threat Level Distribution "),
    );
    f.render_widget(paragraph, area);
}

fn draw_timeline(f: &mut Frame, app: &App, area: Rect) {
    let labels: Vec<String> = app
        .series
        .timeline
        .iter()
        .map(|(date, _)| format!("{}{}", MONTHS[(date.month as usize - 1) % 12], date.day))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&app.series.timeline)
        .map(|(label, (_, count))| (label.as_str(), *count as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Close Approaches Timeline 2025 "),
        )
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta));

    f.render_widget(chart, area);
}

fn draw_size_scatter(f: &mut Frame, app: &App, area: Rect) {
    let (hazardous, safe): (Vec<(f64, f64)>, Vec<(f64, f64)>) = {
        let mut hazardous = Vec::new();
        let mut safe = Vec::new();
        for p in &app.series.scatter {
            let point = (p.diameter_m, p.velocity_km_s);
            if p.hazardous {
                hazardous.push(point);
            } else {
                safe.push(point);
            }
        }
        (hazardous, safe)
    };

    let datasets = vec![
        Dataset::default()
            .name("Hazardous")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&hazardous),
        Dataset::default()
            .name("Safe")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Green))
            .data(&safe),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Size vs Hazard Correlation "),
        )
        .x_axis(
            Axis::default()
                .title("Diameter (m)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1000.0])
                .labels(["0", "500", "1000"]),
        )
        .y_axis(
            Axis::default()
                .title("km/s")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 30.0])
                .labels(["0", "15", "30"]),
        );

    f.render_widget(chart, area);
}

fn draw_event_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .logs
        .recent(visible)
        .into_iter()
        .map(|(level, message)| {
            let style = match level {
                Level::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Level::Warn => Style::default().fg(Color::Yellow),
                Level::Info => Style::default().fg(Color::White),
                _ => Style::default().fg(Color::DarkGray),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:5} ", level), Style::default().fg(Color::DarkGray)),
                Span::styled(message, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Event Log ({}) ", app.logs.line_count())),
    );
    f.render_widget(list, area);
}
