//! Orbital map view: top-down projection of the illustrative tracks

use crate::app::App;
use neo_core::orbit::{plot_extent, EARTH_RADIUS_KM};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders, List, ListItem,
    },
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(72)])
        .split(area);

    draw_map(f, app, chunks[0]);
    draw_legend(f, app, chunks[1]);
}

fn draw_map(f: &mut Frame, app: &App, area: Rect) {
    let extent = plot_extent(&app.tracks) / app.orbit_zoom;
    let earth_radius = EARTH_RADIUS_KM / 1000.0;

    let paths: Vec<(Color, Vec<(f64, f64)>)> = app
        .tracks
        .iter()
        .map(|t| {
            let color = if t.hazardous { Color::Red } else { Color::Green };
            (color, t.path.iter().map(|p| (p.x, p.y)).collect())
        })
        .collect();
    let markers: Vec<(Color, &'static str, (f64, f64))> = app
        .tracks
        .iter()
        .map(|t| {
            let m = t.marker();
            let color = if t.hazardous { Color::LightRed } else { Color::LightGreen };
            (color, marker_glyph(t.marker_size), (m.x, m.y))
        })
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Orbital Map (thousand km, zoom {:.1}x) ", app.orbit_zoom)),
        )
        .marker(Marker::Braille)
        .x_bounds([-extent, extent])
        .y_bounds([-extent, extent])
        .paint(move |ctx| {
            for (color, coords) in &paths {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
            ctx.layer();
            for (color, glyph, (x, y)) in &markers {
                ctx.print(*x, *y, Span::styled(*glyph, Style::default().fg(*color)));
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: earth_radius.max(extent / 40.0),
                color: Color::Blue,
            });
            ctx.print(0.0, 0.0, Span::styled("Earth", Style::default().fg(Color::Cyan)));
        });

    f.render_widget(canvas, area);
}

/// Bigger objects get heavier glyphs
fn marker_glyph(marker_size: f64) -> &'static str {
    if marker_size < 8.0 {
        "•"
    } else if marker_size < 16.0 {
        "●"
    } else {
        "⬤"
    }
}

fn draw_legend(f: &mut Frame, app: &App, area: Rect) {
    let mut items = vec![
        ListItem::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::raw("Potentially hazardous"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::raw("Safe"),
        ])),
        ListItem::new(""),
    ];

    items.extend(app.tracks.iter().map(|t| {
        let color = if t.hazardous { Color::Red } else { Color::Green };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", marker_glyph(t.marker_size)),
                    Style::default().fg(color),
                ),
                Span::styled(t.label(), Style::default().fg(color)),
            ]),
            Line::from(Span::styled(
                format!("  {:.0}k km from Earth", t.radius),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tracked ({}) ", app.tracks.len())),
    );
    f.render_widget(list, area);
}
