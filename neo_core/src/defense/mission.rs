//! Impactor-2025 interactive defense mission

use crate::types::LookupError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Probability threshold: a launch succeeds when the roll exceeds this
pub const FAILURE_THRESHOLD: f64 = 0.3;

/// Deflection distance reported for a successful mission (km)
pub const SUCCESS_DEFLECTION_KM: f64 = 15_842.0;

/// Impact probability reported for a failed mission (%)
pub const FAILURE_IMPACT_PROBABILITY: f64 = 89.0;

/// Strategy choices offered by the mission scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStrategy {
    KineticImpactor,
    NuclearDeflection,
    GravityTractor,
    CombinedApproach,
}

impl MissionStrategy {
    pub fn all() -> &'static [MissionStrategy] {
        &[
            MissionStrategy::KineticImpactor,
            MissionStrategy::NuclearDeflection,
            MissionStrategy::GravityTractor,
            MissionStrategy::CombinedApproach,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MissionStrategy::KineticImpactor => "Kinetic Impactor",
            MissionStrategy::NuclearDeflection => "Nuclear Deflection",
            MissionStrategy::GravityTractor => "Gravity Tractor",
            MissionStrategy::CombinedApproach => "Combined Approach",
        }
    }
}

impl fmt::Display for MissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MissionStrategy {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MissionStrategy::all()
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| LookupError::UnknownMissionStrategy(s.to_string()))
    }
}

/// Defense budget tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetTier {
    OneBillion,
    FiveBillion,
    TenBillion,
    FiftyBillion,
    HundredBillion,
}

impl BudgetTier {
    pub fn all() -> &'static [BudgetTier] {
        &[
            BudgetTier::OneBillion,
            BudgetTier::FiveBillion,
            BudgetTier::TenBillion,
            BudgetTier::FiftyBillion,
            BudgetTier::HundredBillion,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::OneBillion => "$1B",
            BudgetTier::FiveBillion => "$5B",
            BudgetTier::TenBillion => "$10B",
            BudgetTier::FiftyBillion => "$50B",
            BudgetTier::HundredBillion => "$100B",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mission setup chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionParameters {
    /// 30-365
    pub days_to_impact: u32,
    /// 200-1000 m
    pub asteroid_size_m: f64,
    pub budget: BudgetTier,
    pub strategy: MissionStrategy,
}

impl Default for MissionParameters {
    fn default() -> Self {
        MissionParameters {
            days_to_impact: 180,
            asteroid_size_m: 450.0,
            budget: BudgetTier::OneBillion,
            strategy: MissionStrategy::KineticImpactor,
        }
    }
}

impl MissionParameters {
    /// Launch the mission
    ///
    /// The parameters are shown back in the report; the outcome is a
    /// single 70/30 roll regardless of them.
    pub fn launch(&self, rng: &mut impl Rng) -> MissionOutcome {
        let roll: f64 = rng.gen();
        if roll > FAILURE_THRESHOLD {
            log::info!(
                "Mission {} succeeded (roll {:.3})",
                self.strategy,
                roll
            );
            MissionOutcome::Success {
                deflection_km: SUCCESS_DEFLECTION_KM,
            }
        } else {
            log::warn!("Mission {} failed (roll {:.3})", self.strategy, roll);
            MissionOutcome::Failure {
                impact_probability: FAILURE_IMPACT_PROBABILITY,
            }
        }
    }
}

/// Result of a mission launch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MissionOutcome {
    Success { deflection_km: f64 },
    Failure { impact_probability: f64 },
}

impl MissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MissionOutcome::Success { .. })
    }

    pub fn headline(&self) -> &'static str {
        match self {
            MissionOutcome::Success { .. } => "MISSION SUCCESSFUL!",
            MissionOutcome::Failure { .. } => "MISSION FAILED!",
        }
    }

    /// Status lines for the mission report
    pub fn report(&self) -> Vec<String> {
        match self {
            MissionOutcome::Success { deflection_km } => vec![
                "Earth Defense Status: SECURE".to_string(),
                format!("Asteroid Deflected: {} km from Earth", group_thousands(*deflection_km)),
                "Casualties Prevented: Millions".to_string(),
            ],
            MissionOutcome::Failure { impact_probability } => vec![
                "Earth Defense Status: CRITICAL".to_string(),
                format!("Impact Probability: {:.0}%", impact_probability),
                "Emergency Evacuation: Required".to_string(),
            ],
        }
    }
}

/// Whole number with thousands separators
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 {
        out.insert(0, '-');
    }
    out
}
