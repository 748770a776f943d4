//! Application state

use crate::logger::LogBuffer;
use neo_core::analytics::illustrative::{
    approach_timeline, probability_grid, sampled_velocity_distribution, size_velocity_scatter,
    ScatterPoint,
};
use neo_core::analytics::{FeedSummary, SeismicSummary};
use neo_core::date::CalendarDate;
use neo_core::defense::{BudgetTier, MissionStrategy};
use neo_core::feed::{HttpTransport, OfflineTransport, ReqwestTransport};
use neo_core::orbit::{build_tracks, OrbitTrack};
use neo_core::{
    DashboardConfig, DefenseInputs, DefenseResult, DefenseStrategy, FeedClient, ImpactInputs,
    ImpactResult, MissionOutcome, MissionParameters, NeoFeed, SeismicEvent, Sourced,
    TargetMaterial,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Slider bounds as (min, max, step)
pub mod limits {
    pub const DIAMETER: (f64, f64, f64) = (50.0, 2000.0, 10.0);
    pub const VELOCITY: (f64, f64, f64) = (5.0, 30.0, 1.0);
    pub const ANGLE: (f64, f64, f64) = (15.0, 90.0, 1.0);
    pub const DEFENSE_SIZE: (f64, f64, f64) = (100.0, 1000.0, 10.0);
    pub const WARNING_YEARS: (f64, f64, f64) = (1.0, 20.0, 1.0);
    pub const MISSION_DAYS: (u32, u32, u32) = (30, 365, 5);
    pub const MISSION_SIZE: (f64, f64, f64) = (200.0, 1000.0, 10.0);
    pub const ORBIT_ZOOM: (f64, f64, f64) = (1.0, 8.0, 0.5);
}

pub const ALERT_MESSAGE: &str = "All systems nominal - No immediate threats";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Impact,
    Defense,
    Mission,
    Orbits,
    Data,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Impact,
            Tab::Defense,
            Tab::Mission,
            Tab::Orbits,
            Tab::Data,
            Tab::Help,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Impact => "Impact",
            Tab::Defense => "Defense",
            Tab::Mission => "Impactor-2025",
            Tab::Orbits => "Orbits",
            Tab::Data => "NASA Data",
            Tab::Help => "Help",
        }
    }
}

/// Randomized monitoring charts, regenerated on refresh
#[derive(Debug, Clone)]
pub struct MonitoringSeries {
    pub velocity: Vec<(&'static str, usize)>,
    pub timeline: Vec<(CalendarDate, u32)>,
    pub scatter: Vec<ScatterPoint>,
    pub probability: Vec<Vec<f64>>,
}

impl MonitoringSeries {
    fn generate(rng: &mut ChaCha8Rng) -> Self {
        MonitoringSeries {
            velocity: sampled_velocity_distribution(rng),
            timeline: approach_timeline(rng),
            scatter: size_velocity_scatter(rng),
            probability: probability_grid(rng),
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub config: DashboardConfig,
    client: FeedClient<Box<dyn HttpTransport>>,
    pub rng: ChaCha8Rng,
    pub logs: LogBuffer,
    // Feed snapshots
    pub neo: Sourced<NeoFeed>,
    pub seismic: Sourced<Vec<SeismicEvent>>,
    pub summary: FeedSummary,
    pub seismic_summary: SeismicSummary,
    pub tracks: Vec<OrbitTrack>,
    pub series: MonitoringSeries,
    // Impact simulator
    pub impact: ImpactInputs,
    pub impact_field: usize,
    pub impact_result: Option<ImpactResult>,
    // Defense simulator
    pub defense: DefenseInputs,
    pub defense_field: usize,
    pub defense_result: Option<DefenseResult>,
    // Impactor-2025
    pub mission: MissionParameters,
    pub mission_field: usize,
    pub mission_outcome: Option<MissionOutcome>,
    pub orbit_zoom: f64,
    pub data_scroll: usize,
    /// Tab to return to when help is closed
    pub help_return: Option<Tab>,
}

impl App {
    /// Build the app and perform the initial fetch
    pub fn new(
        config: DashboardConfig,
        transport: Box<dyn HttpTransport>,
        mut rng: ChaCha8Rng,
        logs: LogBuffer,
    ) -> Self {
        let client = FeedClient::new(transport, config.api.clone());
        let today = CalendarDate::today();
        let neo = client.fetch_neo_feed(today, &mut rng);
        let seismic = client.fetch_seismic(&mut rng);
        let tracks = build_tracks(&neo.data, &mut rng);
        let series = MonitoringSeries::generate(&mut rng);

        App {
            current_tab: Tab::Dashboard,
            summary: FeedSummary::from_feed(&neo.data),
            seismic_summary: SeismicSummary::from_events(&seismic.data),
            config,
            client,
            rng,
            logs,
            neo,
            seismic,
            tracks,
            series,
            impact: ImpactInputs::default(),
            impact_field: 0,
            impact_result: None,
            defense: DefenseInputs::default(),
            defense_field: 0,
            defense_result: None,
            mission: MissionParameters::default(),
            mission_field: 0,
            mission_outcome: None,
            orbit_zoom: 1.0,
            data_scroll: 0,
            help_return: None,
        }
    }

    /// Network-backed transport, or offline when disabled or unavailable
    pub fn transport_for(config: &DashboardConfig, offline: bool) -> Box<dyn HttpTransport> {
        if offline {
            log::info!("Offline mode: using simulated feeds");
            return Box::new(OfflineTransport);
        }
        match ReqwestTransport::new(Duration::from_secs(config.api.timeout_secs)) {
            Ok(transport) => Box::new(transport),
            Err(err) => {
                log::warn!("HTTP client unavailable, using simulated feeds: {}", err);
                Box::new(OfflineTransport)
            }
        }
    }

    pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
        match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Impact => self.impact_field = self.impact_field.saturating_sub(1),
            Tab::Defense => self.defense_field = self.defense_field.saturating_sub(1),
            Tab::Mission => self.mission_field = self.mission_field.saturating_sub(1),
            Tab::Orbits => {
                let (min, max, step) = limits::ORBIT_ZOOM;
                self.orbit_zoom = (self.orbit_zoom + step).clamp(min, max);
            }
            Tab::Data => self.data_scroll = self.data_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Impact => self.impact_field = (self.impact_field + 1).min(3),
            Tab::Defense => self.defense_field = (self.defense_field + 1).min(2),
            Tab::Mission => self.mission_field = (self.mission_field + 1).min(3),
            Tab::Orbits => {
                let (min, max, step) = limits::ORBIT_ZOOM;
                self.orbit_zoom = (self.orbit_zoom - step).clamp(min, max);
            }
            Tab::Data => {
                if self.data_scroll + 1 < self.seismic.data.len() {
                    self.data_scroll += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(-1);
    }

    pub fn on_right(&mut self) {
        self.adjust(1);
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Impact => self.simulate_impact(),
            Tab::Defense => self.deploy_defense(),
            Tab::Mission => self.launch_mission(),
            _ => {}
        }
    }

    /// Move the selected form control one step
    fn adjust(&mut self, dir: i32) {
        match self.current_tab {
            Tab::Impact => {
                let inputs = &mut self.impact;
                match self.impact_field {
                    0 => inputs.diameter_m = step(inputs.diameter_m, dir, limits::DIAMETER),
                    1 => inputs.velocity_km_s = step(inputs.velocity_km_s, dir, limits::VELOCITY),
                    2 => inputs.angle_deg = step(inputs.angle_deg, dir, limits::ANGLE),
                    _ => inputs.material = cycle(TargetMaterial::all(), inputs.material, dir),
                }
                if self.impact_result.is_some() {
                    self.simulate_impact();
                }
            }
            Tab::Defense => {
                let inputs = &mut self.defense;
                match self.defense_field {
                    0 => inputs.strategy = cycle(DefenseStrategy::all(), inputs.strategy, dir),
                    1 => {
                        inputs.asteroid_size_m =
                            step(inputs.asteroid_size_m, dir, limits::DEFENSE_SIZE)
                    }
                    _ => {
                        inputs.warning_time_years =
                            step(inputs.warning_time_years, dir, limits::WARNING_YEARS)
                    }
                }
                if self.defense_result.is_some() {
                    self.deploy_defense();
                }
            }
            Tab::Mission => {
                let params = &mut self.mission;
                match self.mission_field {
                    0 => {
                        let (min, max, inc) = limits::MISSION_DAYS;
                        let days = params.days_to_impact as i64 + (dir * inc as i32) as i64;
                        params.days_to_impact = days.clamp(min as i64, max as i64) as u32;
                    }
                    1 => {
                        params.asteroid_size_m =
                            step(params.asteroid_size_m, dir, limits::MISSION_SIZE)
                    }
                    2 => params.budget = cycle(BudgetTier::all(), params.budget, dir),
                    _ => params.strategy = cycle(MissionStrategy::all(), params.strategy, dir),
                }
            }
            _ => {}
        }
    }

    pub fn simulate_impact(&mut self) {
        let result = neo_core::impact::compute_impact_effects_with(
            &self.impact,
            &self.config.simulation,
        );
        if self.impact_result.is_none() {
            log::info!(
                "Impact simulated: {:.0} m at {:.0} km/s, {:.1} Mt",
                self.impact.diameter_m,
                self.impact.velocity_km_s,
                result.energy_megatons
            );
        }
        self.impact_result = Some(result);
    }

    pub fn deploy_defense(&mut self) {
        let result = self.defense.compute(&mut self.rng);
        if self.defense_result.is_none() {
            log::info!(
                "Defense deployed: {} at {:.1}% success",
                result.strategy,
                result.success_rate * 100.0
            );
        }
        self.defense_result = Some(result);
    }

    pub fn launch_mission(&mut self) {
        self.mission_outcome = Some(self.mission.launch(&mut self.rng));
    }

    /// Refetch both feeds and regenerate the illustrative charts
    pub fn refresh(&mut self) {
        log::info!("Refreshing feeds");
        self.neo = self.client.fetch_neo_feed(CalendarDate::today(), &mut self.rng);
        self.seismic = self.client.fetch_seismic(&mut self.rng);
        self.summary = FeedSummary::from_feed(&self.neo.data);
        self.seismic_summary = SeismicSummary::from_events(&self.seismic.data);
        self.tracks = build_tracks(&self.neo.data, &mut self.rng);
        self.series = MonitoringSeries::generate(&mut self.rng);
        self.data_scroll = 0;
    }

    pub fn alert_status(&mut self) {
        log::warn!("{}", ALERT_MESSAGE);
    }

    pub fn global_view(&mut self) {
        log::info!("Loading global asteroid distribution...");
        self.current_tab = Tab::Orbits;
    }

    /// Open help, or go back to the tab it was opened from
    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.help_return.take().unwrap_or(Tab::Dashboard);
        } else {
            self.help_return = Some(self.current_tab);
            self.current_tab = Tab::Help;
        }
    }
}

/// Step a slider value, staying on its bounds
fn step(value: f64, dir: i32, (min, max, inc): (f64, f64, f64)) -> f64 {
    (value + dir as f64 * inc).clamp(min, max)
}

/// Next or previous option, wrapping around
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, dir: i32) -> T {
    let len = options.len() as i32;
    let idx = options.iter().position(|o| *o == current).unwrap_or(0) as i32;
    options[(idx + dir).rem_euclid(len) as usize]
}
