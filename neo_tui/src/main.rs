//! neo_tui - Terminal dashboard for near-Earth object tracking and impact simulation

mod app;
mod logger;
mod ui;

use anyhow::Context;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use neo_core::DashboardConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_PATHS: [&str; 2] = ["config/dashboard.toml", "../config/dashboard.toml"];

#[derive(Parser, Debug)]
#[command(name = "neo_tui", version, about = "Near-Earth object and planetary defense dashboard")]
struct Cli {
    #[arg(long, help = "Path to dashboard.toml")]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Skip the network and use simulated feeds")]
    offline: bool,
    #[arg(long, help = "Seed for the dashboard RNG")]
    seed: Option<u64>,
    #[arg(long, default_value_t = false, help = "Show debug messages in the event log")]
    verbose: bool,
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    if let Some(path) = explicit {
        let config = DashboardConfig::load(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?;
        return Ok(config.with_env_overrides());
    }

    let config = CONFIG_PATHS
        .iter()
        .map(Path::new)
        .filter(|p| p.exists())
        .find_map(|p| match DashboardConfig::load(p) {
            Ok(cfg) => {
                log::info!("Loaded config from '{}'", p.display());
                Some(cfg)
            }
            Err(e) => {
                log::warn!("Error loading config from '{}': {}", p.display(), e);
                None
            }
        })
        .unwrap_or_else(|| {
            log::info!("No config file found, using defaults");
            DashboardConfig::default()
        });

    Ok(config.with_env_overrides())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logs = logger::init(level);

    // Config and first fetch happen before terminal setup so errors are visible
    let config = load_config(cli.config.as_deref())?;
    let transport = App::transport_for(&config, cli.offline);
    let mut app = App::new(config, transport, App::rng_for(cli.seed), logs);

    // Setup terminal
    if let Err(e) = enable_raw_mode() {
        eprintln!("Error: Cannot enable raw mode: {}", e);
        eprintln!("The dashboard requires a terminal. Run it directly, not piped or in a non-TTY context.");
        return Err(e.into());
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(anyhow::Error::new(e).context("entering alternate screen"));
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal event loop")
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char(c @ '1'..='7'), _) => {
                        app.set_tab(c as usize - '1' as usize)
                    }
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
                    (KeyCode::Char('r'), _) => app.refresh(),
                    (KeyCode::Char('s'), _) => app.alert_status(),
                    (KeyCode::Char('g'), _) => app.global_view(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
