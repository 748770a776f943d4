//! Impact effects calculation

use super::constants::{
    AFFECTED_AREA_FACTOR, CRATER_SCALE, FIREBALL_EXPONENT, FIREBALL_SCALE, SEISMIC_BASE,
    SEISMIC_DIVISOR,
};
use super::EffectDistribution;
use crate::config::SimulationConstants;
use crate::types::TargetMaterial;
use serde::{Deserialize, Serialize};

/// Parameters of a simulated impact
///
/// Bounds are enforced by whoever collects the values (the dashboard
/// sliders); nothing here validates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactInputs {
    /// Asteroid diameter in meters
    pub diameter_m: f64,
    /// Impact velocity in km/s
    pub velocity_km_s: f64,
    /// Impact angle in degrees above the horizon
    pub angle_deg: f64,
    pub material: TargetMaterial,
}

impl ImpactInputs {
    pub fn new(diameter_m: f64, velocity_km_s: f64, angle_deg: f64, material: TargetMaterial) -> Self {
        ImpactInputs {
            diameter_m,
            velocity_km_s,
            angle_deg,
            material,
        }
    }

    pub fn compute(&self) -> ImpactResult {
        compute_impact_effects_with(self, &SimulationConstants::default())
    }
}

impl Default for ImpactInputs {
    fn default() -> Self {
        ImpactInputs::new(500.0, 15.0, 45.0, TargetMaterial::Ocean)
    }
}

/// Computed impact effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Kinetic energy in joules
    pub energy_joules: f64,
    /// Kinetic energy in megatons of TNT
    pub energy_megatons: f64,
    /// Crater diameter in meters
    pub crater_diameter_m: f64,
    /// Richter-like magnitude
    pub seismic_magnitude: f64,
    /// Fireball radius in km
    pub fireball_radius_km: f64,
    /// Affected area in km²
    pub affected_area_km2: f64,
    pub distribution: EffectDistribution,
}

/// Calculate impact effects with the default physical assumptions
///
/// `angle` of zero gives a zero-diameter crater; non-positive `diameter`
/// or `velocity` produce non-finite seismic/fireball values. Both are
/// returned as computed.
pub fn compute_impact_effects(
    diameter: f64,
    velocity: f64,
    angle: f64,
    material: TargetMaterial,
) -> ImpactResult {
    ImpactInputs::new(diameter, velocity, angle, material).compute()
}

/// Calculate impact effects with configured density and TNT equivalence
pub fn compute_impact_effects_with(
    inputs: &ImpactInputs,
    constants: &SimulationConstants,
) -> ImpactResult {
    let radius = inputs.diameter_m / 2.0;
    let mass = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3) * constants.bulk_density;

    let velocity_m_s = inputs.velocity_km_s * 1000.0;
    let energy_joules = 0.5 * mass * velocity_m_s * velocity_m_s;
    let energy_megatons = energy_joules / constants.joules_per_megaton;

    let crater_diameter_m = CRATER_SCALE
        * inputs.diameter_m
        * (inputs.velocity_km_s / 10.0)
        * inputs.angle_deg.to_radians().sin();
    let seismic_magnitude = SEISMIC_BASE + (energy_joules.log10() - 12.0) / SEISMIC_DIVISOR;
    let fireball_radius_km = FIREBALL_SCALE * energy_megatons.powf(FIREBALL_EXPONENT);

    ImpactResult {
        energy_joules,
        energy_megatons,
        crater_diameter_m,
        seismic_magnitude,
        fireball_radius_km,
        affected_area_km2: crater_diameter_m * AFFECTED_AREA_FACTOR,
        distribution: EffectDistribution::from_angle_and_velocity(
            inputs.angle_deg,
            inputs.velocity_km_s,
        ),
    }
}
