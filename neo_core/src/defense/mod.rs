//! Planetary defense - deflection success estimates and the mission scenario

pub mod mission;
mod success;

pub use mission::{group_thousands, BudgetTier, MissionOutcome, MissionParameters, MissionStrategy};
pub use success::{
    compute_defense_success, compute_defense_success_for_label, size_factor, time_factor,
    DefenseInputs, DefenseResult, EarthSafety,
};

/// Defense calculation constants
pub mod constants {
    /// Asteroid size at which the size penalty reaches zero effectiveness (m)
    pub const SIZE_SCALE_M: f64 = 2000.0;

    /// Floor for the size penalty
    pub const MIN_SIZE_FACTOR: f64 = 0.1;

    /// Warning time at which the time penalty saturates (years)
    pub const FULL_WARNING_YEARS: f64 = 10.0;

    /// Success rate clamp
    pub const MIN_SUCCESS_RATE: f64 = 0.3;
    pub const MAX_SUCCESS_RATE: f64 = 0.98;

    /// Miss distance roll range (km), before success scaling
    pub const MISS_DISTANCE_MIN_KM: u32 = 5_000;
    pub const MISS_DISTANCE_MAX_KM: u32 = 50_000;

    /// Success rate that leaves the rolled miss distance unscaled
    pub const MISS_DISTANCE_REFERENCE_RATE: f64 = 0.85;
}
