//! Core labels and enumerations shared by the calculators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure to map a user-facing label onto one of the closed label sets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown defense strategy: {0}")]
    UnknownStrategy(String),
    #[error("Unknown target material: {0}")]
    UnknownMaterial(String),
    #[error("Unknown mission strategy: {0}")]
    UnknownMissionStrategy(String),
}

/// Surface the asteroid strikes
///
/// Carried through the impact calculation as a label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMaterial {
    Ocean,
    ContinentalCrust,
    SedimentaryRock,
    Granite,
}

impl TargetMaterial {
    pub fn all() -> &'static [TargetMaterial] {
        &[
            TargetMaterial::Ocean,
            TargetMaterial::ContinentalCrust,
            TargetMaterial::SedimentaryRock,
            TargetMaterial::Granite,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetMaterial::Ocean => "Ocean",
            TargetMaterial::ContinentalCrust => "Continental Crust",
            TargetMaterial::SedimentaryRock => "Sedimentary Rock",
            TargetMaterial::Granite => "Granite",
        }
    }
}

impl fmt::Display for TargetMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetMaterial {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetMaterial::all()
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| LookupError::UnknownMaterial(s.to_string()))
    }
}

/// Deflection strategy with an assumed baseline success rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseStrategy {
    KineticImpactor,
    GravityTractor,
    NuclearOption,
}

impl DefenseStrategy {
    pub fn all() -> &'static [DefenseStrategy] {
        &[
            DefenseStrategy::KineticImpactor,
            DefenseStrategy::GravityTractor,
            DefenseStrategy::NuclearOption,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DefenseStrategy::KineticImpactor => "Kinetic Impactor",
            DefenseStrategy::GravityTractor => "Gravity Tractor",
            DefenseStrategy::NuclearOption => "Nuclear Option",
        }
    }

    /// Success rate before size and warning-time penalties
    pub fn base_success(&self) -> f64 {
        match self {
            DefenseStrategy::KineticImpactor => 0.85,
            DefenseStrategy::GravityTractor => 0.70,
            DefenseStrategy::NuclearOption => 0.95,
        }
    }

    /// Short description shown next to the strategy selector
    pub fn description(&self) -> &'static str {
        match self {
            DefenseStrategy::KineticImpactor => {
                "Spacecraft rams the asteroid to nudge its velocity (DART-style)"
            }
            DefenseStrategy::GravityTractor => {
                "Station-keeping spacecraft tugs the asteroid with its own gravity"
            }
            DefenseStrategy::NuclearOption => {
                "Standoff detonation ablates the surface for a large impulse"
            }
        }
    }

    /// Typical lead time from launch to effect
    pub fn response_time(&self) -> &'static str {
        match self {
            DefenseStrategy::KineticImpactor => "2-3 years",
            DefenseStrategy::GravityTractor => "5-10 years",
            DefenseStrategy::NuclearOption => "1-2 years",
        }
    }
}

impl fmt::Display for DefenseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DefenseStrategy {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefenseStrategy::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| LookupError::UnknownStrategy(s.to_string()))
    }
}

/// Category in the impact effect breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCategory {
    CraterFormation,
    SeismicWaves,
    ThermalRadiation,
    EjectaAndDebris,
}

impl EffectCategory {
    pub fn all() -> &'static [EffectCategory] {
        &[
            EffectCategory::CraterFormation,
            EffectCategory::SeismicWaves,
            EffectCategory::ThermalRadiation,
            EffectCategory::EjectaAndDebris,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EffectCategory::CraterFormation => "Crater Formation",
            EffectCategory::SeismicWaves => "Seismic Waves",
            EffectCategory::ThermalRadiation => "Thermal Radiation",
            EffectCategory::EjectaAndDebris => "Ejecta & Debris",
        }
    }
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
