//! Effect category breakdown

use crate::types::EffectCategory;
use serde::{Deserialize, Serialize};

/// Share of impact energy per effect category, in percent
///
/// Always normalized so the four shares sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDistribution {
    shares: Vec<(EffectCategory, f64)>,
}

impl EffectDistribution {
    /// Shift fixed base shares by angle and velocity, then normalize
    ///
    /// Steeper impacts favour crater formation over ejecta; faster impacts
    /// add seismic and thermal output.
    pub fn from_angle_and_velocity(angle_deg: f64, velocity_km_s: f64) -> Self {
        let angle_factor = angle_deg / 90.0;
        let velocity_factor = velocity_km_s / 30.0;

        let raw = [
            (EffectCategory::CraterFormation, 35.0 + 15.0 * angle_factor),
            (EffectCategory::SeismicWaves, 20.0 + 10.0 * velocity_factor),
            (EffectCategory::ThermalRadiation, 25.0 + 5.0 * velocity_factor),
            (EffectCategory::EjectaAndDebris, 20.0 + 10.0 * (1.0 - angle_factor)),
        ];

        let total: f64 = raw.iter().map(|(_, v)| v).sum();
        let shares = raw
            .iter()
            .map(|(category, value)| (*category, value / total * 100.0))
            .collect();

        EffectDistribution { shares }
    }

    /// Percentage for a category
    pub fn get(&self, category: EffectCategory) -> f64 {
        self.shares
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffectCategory, f64)> + '_ {
        self.shares.iter().copied()
    }

    pub fn total(&self) -> f64 {
        self.shares.iter().map(|(_, v)| v).sum()
    }

    /// Category with the largest share
    pub fn dominant(&self) -> EffectCategory {
        self.shares
            .iter()
            .copied()
            .fold(None, |best: Option<(EffectCategory, f64)>, (c, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((c, v)),
            })
            .map(|(c, _)| c)
            .unwrap_or(EffectCategory::CraterFormation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_impact() {
        // angle 90, velocity 30: 50 / 30 / 30 / 20 of 130
        let dist = EffectDistribution::from_angle_and_velocity(90.0, 30.0);
        assert!((dist.get(EffectCategory::CraterFormation) - 50.0 / 130.0 * 100.0).abs() < 1e-9);
        assert!((dist.get(EffectCategory::EjectaAndDebris) - 20.0 / 130.0 * 100.0).abs() < 1e-9);
        assert_eq!(dist.dominant(), EffectCategory::CraterFormation);
    }

    #[test]
    fn test_grazing_impact_favours_ejecta() {
        let steep = EffectDistribution::from_angle_and_velocity(90.0, 15.0);
        let shallow = EffectDistribution::from_angle_and_velocity(15.0, 15.0);
        assert!(
            shallow.get(EffectCategory::EjectaAndDebris) > steep.get(EffectCategory::EjectaAndDebris)
        );
        assert!(
            shallow.get(EffectCategory::CraterFormation) < steep.get(EffectCategory::CraterFormation)
        );
    }

    #[test]
    fn test_category_order_is_fixed() {
        let dist = EffectDistribution::from_angle_and_velocity(45.0, 15.0);
        let order: Vec<EffectCategory> = dist.iter().map(|(c, _)| c).collect();
        assert_eq!(order, EffectCategory::all().to_vec());
        assert!((dist.total() - 100.0).abs() < 1e-9);
    }
}
