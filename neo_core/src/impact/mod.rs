//! Impact effects - energy, crater, seismic and thermal estimates

mod distribution;
mod effects;

pub use distribution::EffectDistribution;
pub use effects::{compute_impact_effects, compute_impact_effects_with, ImpactInputs, ImpactResult};

/// Impact calculation constants
pub mod constants {
    /// Assumed asteroid bulk density (kg/m³)
    pub const BULK_DENSITY: f64 = 3000.0;

    /// Joules per megaton of TNT
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;

    /// Crater scaling: crater = CRATER_SCALE * diameter * (velocity / 10) * sin(angle)
    pub const CRATER_SCALE: f64 = 1.2;

    /// Seismic mapping: magnitude = SEISMIC_BASE + (log10(E) - 12) / SEISMIC_DIVISOR
    pub const SEISMIC_BASE: f64 = 4.5;
    pub const SEISMIC_DIVISOR: f64 = 1.5;

    /// Fireball scaling: radius = FIREBALL_SCALE * energy_mt ^ FIREBALL_EXPONENT
    pub const FIREBALL_SCALE: f64 = 50.0;
    pub const FIREBALL_EXPONENT: f64 = 0.4;

    /// Affected area as a multiple of crater diameter
    pub const AFFECTED_AREA_FACTOR: f64 = 3.0;
}
