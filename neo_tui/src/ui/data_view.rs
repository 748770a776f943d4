//! NASA data analysis view

use crate::app::App;
use crate::ui::{bar_line, value_line};
use neo_core::analytics::illustrative::{WATCHLIST, WATCH_YEARS};
use neo_core::analytics::{hazard_split, size_histogram};
use neo_core::date::format_timestamp;
use neo_core::defense::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
    },
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Min(8),
        ])
        .split(area);

    draw_status(f, app, rows[0]);

    let source = ChartSource::from_app(app);
    let charts = halves(rows[1]);
    draw_size_distribution(f, &source, charts[0]);
    draw_orbital_dynamics(f, &source, charts[1]);

    let middle = halves(rows[2]);
    draw_hazard_analysis(f, app, middle[0]);
    draw_probability_heatmap(f, app, middle[1]);

    draw_seismic(f, app, rows[3]);
}

/// Points behind the size and dynamics charts
///
/// A live feed with no usable objects falls back to the illustrative
/// size/velocity series so the charts are never blank.
struct ChartSource {
    diameters_m: Vec<f64>,
    /// (x, velocity km/s, hazardous)
    points: Vec<(f64, f64, bool)>,
    x_title: &'static str,
    illustrative: bool,
}

impl ChartSource {
    fn from_app(app: &App) -> Self {
        if app.neo.data.object_count() > 0 {
            ChartSource {
                diameters_m: app.neo.data.objects().map(|o| o.diameter_m).collect(),
                // million km on x
                points: app
                    .neo
                    .data
                    .objects()
                    .map(|o| (o.miss_distance_km / 1e6, o.velocity_km_s, o.hazardous))
                    .collect(),
                x_title: "Mkm",
                illustrative: false,
            }
        } else {
            ChartSource {
                diameters_m: app.series.scatter.iter().map(|p| p.diameter_m).collect(),
                points: app
                    .series
                    .scatter
                    .iter()
                    .map(|p| (p.diameter_m, p.velocity_km_s, p.hazardous))
                    .collect(),
                x_title: "Diameter (m)",
                illustrative: true,
            }
        }
    }

    fn title(&self, base: &str) -> String {
        if self.illustrative {
            format!(" {} (illustrative) ", base)
        } else {
            format!(" {} ", base)
        }
    }
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let (icon, color) = if app.neo.origin.is_live() {
        ("✔", Color::Green)
    } else {
        ("↻", Color::Yellow)
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:24}", "Status"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} {}", icon, app.neo.origin.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        value_line("Last Update", format!("{} UTC", format_timestamp(app.neo.fetched_at))),
        value_line(
            "Objects Tracked",
            format!("{} near-Earth objects", app.neo.data.element_count),
        ),
        value_line(
            "Nearest Approach",
            app.summary
                .nearest_km
                .map_or("-".to_string(), |km| format!("{} km", group_thousands(km))),
        ),
        value_line(
            "Largest Object",
            app.summary
                .largest_m
                .map_or("-".to_string(), |m| format!("{:.0} m", m)),
        ),
    ];
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" NASA Data Integration "),
        ),
        area,
    );
}

fn draw_size_distribution(f: &mut Frame, source: &ChartSource, area: Rect) {
    let hist = size_histogram(source.diameters_m.iter().copied());
    let labels: Vec<String> = hist.bin_ranges().map(|(lo, _)| format!("{:.0}", lo)).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&hist.counts)
        .map(|(label, count)| (label.as_str(), *count as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(source.title("Asteroid Size Distribution (m)")),
        )
        .data(data.as_slice())
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::LightBlue))
        .value_style(Style::default().fg(Color::Black).bg(Color::LightBlue));
    f.render_widget(chart, area);
}

fn draw_orbital_dynamics(f: &mut Frame, source: &ChartSource, area: Rect) {
    let mut hazardous = Vec::new();
    let mut safe = Vec::new();
    for &(x, velocity, is_hazardous) in &source.points {
        let point = (x, velocity);
        if is_hazardous {
            hazardous.push(point);
        } else {
            safe.push(point);
        }
    }

    let max_x = hazardous
        .iter()
        .chain(&safe)
        .map(|p| p.0)
        .fold(1.0, f64::max)
        .ceil();
    let max_y = hazardous
        .iter()
        .chain(&safe)
        .map(|p| p.1)
        .fold(1.0, f64::max)
        .ceil();

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
                .title(source.title(if source.illustrative {
                    "Size vs Velocity"
                } else {
                    "Orbital Dynamics: Miss Distance vs Velocity"
                })),
        )
        .x_axis(
            Axis::default()
                .title(source.x_title)
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(vec!["0".to_string(), format!("{:.0}", max_x / 2.0), format!("{:.0}", max_x)]),
        )
        .y_axis(
            Axis::default()
                .title("km/s")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(vec!["0".to_string(), format!("{:.0}", max_y)]),
        );
    f.render_widget(chart, area);
}

fn draw_hazard_analysis(f: &mut Frame, app: &App, area: Rect) {
    let (hazardous, safe) = hazard_split(app.neo.data.objects());
    let total = (hazardous + safe).max(1) as f64;
    let width = area.width.saturating_sub(32) as usize;

    let mut lines = vec![
        bar_line(
            &format!("Hazardous ({})", hazardous),
            hazardous as f64 / total * 100.0,
            width,
            Color::Red,
        ),
        bar_line(
            &format!("Safe ({})", safe),
            safe as f64 / total * 100.0,
            width,
            Color::Green,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Closest approaches",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(app.neo.data.closest(5).into_iter().map(|o| {
        let color = if o.hazardous { Color::Red } else { Color::White };
        Line::from(vec![
            Span::styled(format!("{:28}", o.name), Style::default().fg(color)),
            Span::styled(
                format!("{:>14} km", group_thousands(o.miss_distance_km)),
                Style::default().fg(Color::Gray),
            ),
        ])
    }));

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hazardous Objects Analysis "),
        ),
        area,
    );
}

fn heat_color(p: f64) -> Color {
    if p >= 0.075 {
        Color::Red
    } else if p >= 0.05 {
        Color::LightRed
    } else if p >= 0.025 {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

fn draw_probability_heatmap(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(WATCH_YEARS.iter().map(|y| Cell::from(*y)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = WATCHLIST
        .iter()
        .zip(&app.series.probability)
        .map(|(name, probs)| {
            let cells = std::iter::once(Cell::from(*name)).chain(probs.iter().map(|p| {
                Cell::from(format!("{:.3}", p)).style(Style::default().fg(heat_color(*p)))
            }));
            Row::new(cells.collect::<Vec<_>>())
        })
        .collect();

    let widths = [Constraint::Length(10)]
        .into_iter()
        .chain(std::iter::repeat(Constraint::Length(7)).take(WATCH_YEARS.len()))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Impact Probability Heatmap "),
    );
    f.render_widget(table, area);
}

fn draw_seismic(f: &mut Frame, app: &App, area: Rect) {
    let summary = &app.seismic_summary;
    let title = format!(
        " Recent Seismic Activity (USGS, {}) | Largest {} | Total {} | Avg depth {} ",
        app.seismic.origin.short_label(),
        summary
            .largest_magnitude
            .map_or("-".to_string(), |m| format!("{:.1}", m)),
        summary.count,
        summary
            .average_depth_km
            .map_or("-".to_string(), |d| format!("{:.1} km", d)),
    );

    let header = Row::new(vec!["Place", "Mag", "Depth", "Lat/Lon", "Time (UTC)"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .seismic
        .data
        .iter()
        .skip(app.data_scroll)
        .map(|e| {
            let mag_color = if e.magnitude >= 6.5 {
                Color::Red
            } else if e.magnitude >= 5.5 {
                Color::Yellow
            } else {
                Color::White
            };
            Row::new(vec![
                Cell::from(e.place.clone()),
                Cell::from(format!("{:.1}", e.magnitude)).style(Style::default().fg(mag_color)),
                Cell::from(format!("{:.1} km", e.depth_km)),
                Cell::from(format!("{:.2}, {:.2}", e.latitude, e.longitude)),
                Cell::from(format_timestamp(e.time)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use neo_core::feed::OfflineTransport;
    use neo_core::DashboardConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn offline_app() -> App {
        App::new(
            DashboardConfig::default(),
            Box::new(OfflineTransport),
            ChaCha8Rng::seed_from_u64(12),
            LogBuffer::new(),
        )
    }

    #[test]
    fn test_charts_use_feed_objects() {
        let app = offline_app();
        let source = ChartSource::from_app(&app);
        assert!(!source.illustrative);
        assert_eq!(source.diameters_m.len(), app.neo.data.object_count());
        assert_eq!(source.points.len(), app.neo.data.object_count());
    }

    #[test]
    fn test_empty_feed_falls_back_to_series() {
        let mut app = offline_app();
        app.neo.data.by_date.clear();

        let source = ChartSource::from_app(&app);
        assert!(source.illustrative);
        assert_eq!(source.points.len(), app.series.scatter.len());
        assert_eq!(
            size_histogram(source.diameters_m.iter().copied()).total(),
            app.series.scatter.len()
        );
        assert!(source.title("Sizes").contains("illustrative"));
    }
}
