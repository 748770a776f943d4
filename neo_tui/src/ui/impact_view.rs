//! Impact simulator view

use crate::app::App;
use crate::ui::{bar_line, field_line, section_header, value_line};
use neo_core::defense::group_thousands;
use neo_core::EffectCategory;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_parameters(f, app, chunks[0]);
    draw_analysis(f, app, chunks[1]);
}

fn draw_parameters(f: &mut Frame, app: &App, area: Rect) {
    let inputs = &app.impact;
    let lines = vec![
        section_header("Impact Parameters"),
        Line::from(""),
        field_line(
            "Asteroid Diameter",
            format!("{:.0} m", inputs.diameter_m),
            app.impact_field == 0,
        ),
        field_line(
            "Impact Velocity",
            format!("{:.0} km/s", inputs.velocity_km_s),
            app.impact_field == 1,
        ),
        field_line(
            "Impact Angle",
            format!("{:.0}°", inputs.angle_deg),
            app.impact_field == 2,
        ),
        field_line("Target Material", inputs.material.to_string(), app.impact_field == 3),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Simulate impact",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Target material is shown for context; the model treats all targets alike.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Parameters "));
    f.render_widget(paragraph, area);
}

fn draw_analysis(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Impact Analysis ");

    let Some(result) = &app.impact_result else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Set the parameters and press Enter to run the simulation.",
            Style::default().fg(Color::Gray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let bar_width = area.width.saturating_sub(32) as usize;
    let colors = [Color::Red, Color::Yellow, Color::LightRed, Color::Blue];

    let mut lines = vec![
        section_header("Impact Simulation Results"),
        Line::from(""),
        value_line(
            "Energy Release",
            format!("{:.1} megatons TNT", result.energy_megatons),
        ),
        value_line(
            "Crater Diameter",
            format!("{} meters", group_thousands(result.crater_diameter_m)),
        ),
        value_line(
            "Seismic Magnitude",
            format!("{:.1} Richter", result.seismic_magnitude),
        ),
        value_line("Fireball Radius", format!("{:.1} km", result.fireball_radius_km)),
        value_line(
            "Affected Area",
            format!("{} km²", group_thousands(result.affected_area_km2)),
        ),
        Line::from(""),
        section_header("Impact Energy Distribution"),
        Line::from(""),
    ];

    for (category, color) in EffectCategory::all().iter().zip(colors) {
        lines.push(bar_line(
            category.name(),
            result.distribution.get(*category),
            bar_width,
            color,
        ));
    }

    let dominant = result.distribution.dominant();
    lines.push(Line::from(""));
    lines.push(value_line(
        "Dominant effect",
        format!("{} ({:.1}%)", dominant, result.distribution.get(dominant)),
    ));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
