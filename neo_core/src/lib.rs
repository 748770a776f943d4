//! neo_core - Near-Earth object data and impact/defense calculations
//!
//! This library provides:
//! - Impact effects: energy, crater, seismic magnitude and effect breakdown
//! - Defense success: deflection probability and miss distance
//! - The Impactor-2025 mission scenario
//! - NASA NeoWs and USGS feeds with synthetic fallback
//! - Chart-ready analytics and illustrative orbit paths

pub mod analytics;
pub mod config;
pub mod date;
pub mod defense;
pub mod feed;
pub mod impact;
pub mod orbit;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, DashboardConfig};
pub use defense::{
    compute_defense_success, compute_defense_success_for_label, DefenseInputs, DefenseResult,
    EarthSafety, MissionOutcome, MissionParameters,
};
pub use feed::{DataOrigin, FeedClient, FeedError, NeoFeed, NeoObject, SeismicEvent, Sourced};
pub use impact::{compute_impact_effects, EffectDistribution, ImpactInputs, ImpactResult};
pub use types::{DefenseStrategy, EffectCategory, LookupError, TargetMaterial};
