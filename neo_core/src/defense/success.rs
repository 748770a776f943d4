//! Deflection success probability

use super::constants::{
    FULL_WARNING_YEARS, MAX_SUCCESS_RATE, MIN_SIZE_FACTOR, MIN_SUCCESS_RATE,
    MISS_DISTANCE_MAX_KM, MISS_DISTANCE_MIN_KM, MISS_DISTANCE_REFERENCE_RATE, SIZE_SCALE_M,
};
use crate::types::{DefenseStrategy, LookupError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a deflection attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseInputs {
    pub strategy: DefenseStrategy,
    /// Asteroid diameter in meters
    pub asteroid_size_m: f64,
    /// Years between detection and predicted impact
    pub warning_time_years: f64,
}

impl DefenseInputs {
    pub fn new(strategy: DefenseStrategy, asteroid_size_m: f64, warning_time_years: f64) -> Self {
        DefenseInputs {
            strategy,
            asteroid_size_m,
            warning_time_years,
        }
    }

    pub fn compute(&self, rng: &mut impl Rng) -> DefenseResult {
        compute_defense_success(self.strategy, self.asteroid_size_m, self.warning_time_years, rng)
    }
}

impl Default for DefenseInputs {
    fn default() -> Self {
        DefenseInputs::new(DefenseStrategy::KineticImpactor, 300.0, 5.0)
    }
}

/// Qualitative rating of a success rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthSafety {
    Guaranteed,
    Probable,
    Uncertain,
}

impl EarthSafety {
    pub fn from_success_rate(rate: f64) -> Self {
        if rate > 0.8 {
            EarthSafety::Guaranteed
        } else if rate > 0.6 {
            EarthSafety::Probable
        } else {
            EarthSafety::Uncertain
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EarthSafety::Guaranteed => "GUARANTEED",
            EarthSafety::Probable => "PROBABLE",
            EarthSafety::Uncertain => "UNCERTAIN",
        }
    }
}

impl fmt::Display for EarthSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a deflection estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseResult {
    pub strategy: DefenseStrategy,
    pub size_factor: f64,
    pub time_factor: f64,
    /// Clamped to [0.3, 0.98]
    pub success_rate: f64,
    /// Estimated closest approach after deflection (km)
    pub miss_distance_km: f64,
    pub safety: EarthSafety,
}

/// Size penalty: 1 for tiny objects, falling linearly, floored at 0.1
pub fn size_factor(asteroid_size_m: f64) -> f64 {
    (1.0 - asteroid_size_m / SIZE_SCALE_M).max(MIN_SIZE_FACTOR)
}

/// Warning-time penalty: linear up to ten years, then saturated at 1
pub fn time_factor(warning_time_years: f64) -> f64 {
    (warning_time_years / FULL_WARNING_YEARS).min(1.0)
}

/// Estimate deflection success and the resulting miss distance
///
/// The miss distance is a random roll scaled by the success rate, so the
/// result is only reproducible for a seeded `rng`.
pub fn compute_defense_success(
    strategy: DefenseStrategy,
    asteroid_size: f64,
    warning_time: f64,
    rng: &mut impl Rng,
) -> DefenseResult {
    let size_factor = size_factor(asteroid_size);
    let time_factor = time_factor(warning_time);

    let raw = strategy.base_success() * size_factor * time_factor;
    let success_rate = raw.clamp(MIN_SUCCESS_RATE, MAX_SUCCESS_RATE);

    let roll = rng.gen_range(MISS_DISTANCE_MIN_KM..=MISS_DISTANCE_MAX_KM) as f64;
    let miss_distance_km = roll * (success_rate / MISS_DISTANCE_REFERENCE_RATE);

    DefenseResult {
        strategy,
        size_factor,
        time_factor,
        success_rate,
        miss_distance_km,
        safety: EarthSafety::from_success_rate(success_rate),
    }
}

/// Same as [`compute_defense_success`] but starting from a display label
pub fn compute_defense_success_for_label(
    strategy: &str,
    asteroid_size: f64,
    warning_time: f64,
    rng: &mut impl Rng,
) -> Result<DefenseResult, LookupError> {
    let strategy: DefenseStrategy = strategy.parse()?;
    Ok(compute_defense_success(strategy, asteroid_size, warning_time, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_nuclear_reference_scenario() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = compute_defense_success(DefenseStrategy::NuclearOption, 300.0, 5.0, &mut rng);

        assert!((result.size_factor - 0.85).abs() < 1e-12);
        assert!((result.time_factor - 0.5).abs() < 1e-12);
        // 0.95 * 0.85 * 0.5 is inside the clamp range
        assert!((result.success_rate - 0.40375).abs() < 1e-12);
        assert_eq!(result.safety, EarthSafety::Uncertain);
    }

    #[test]
    fn test_clamped_low() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = compute_defense_success(DefenseStrategy::GravityTractor, 1000.0, 1.0, &mut rng);
        // 0.70 * 0.5 * 0.1 = 0.035 -> 0.3
        assert!((result.success_rate - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_high_not_reached_by_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = compute_defense_success(DefenseStrategy::NuclearOption, 0.0, 20.0, &mut rng);
        assert!((result.success_rate - 0.95).abs() < 1e-12);
        assert_eq!(result.safety, EarthSafety::Guaranteed);
    }

    #[test]
    fn test_miss_distance_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let result =
                compute_defense_success(DefenseStrategy::KineticImpactor, 300.0, 20.0, &mut rng);
            let scale = result.success_rate / 0.85;
            assert!(result.miss_distance_km >= 5000.0 * scale - 1e-6);
            assert!(result.miss_distance_km <= 50000.0 * scale + 1e-6);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = compute_defense_success(
            DefenseStrategy::KineticImpactor,
            450.0,
            8.0,
            &mut StdRng::seed_from_u64(99),
        );
        let b = compute_defense_success(
            DefenseStrategy::KineticImpactor,
            450.0,
            8.0,
            &mut StdRng::seed_from_u64(99),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_label_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = compute_defense_success_for_label("Laser", 300.0, 5.0, &mut rng);
        assert_eq!(result, Err(LookupError::UnknownStrategy("Laser".to_string())));
    }

    #[test]
    fn test_known_label_succeeds() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = compute_defense_success_for_label("Gravity Tractor", 300.0, 5.0, &mut rng).unwrap();
        assert_eq!(result.strategy, DefenseStrategy::GravityTractor);
    }

    #[test]
    fn test_safety_thresholds() {
        assert_eq!(EarthSafety::from_success_rate(0.81), EarthSafety::Guaranteed);
        assert_eq!(EarthSafety::from_success_rate(0.8), EarthSafety::Probable);
        assert_eq!(EarthSafety::from_success_rate(0.6), EarthSafety::Uncertain);
    }

    proptest! {
        #[test]
        fn prop_success_rate_in_range(
            strategy_index in 0usize..3,
            size in 0.0f64..5000.0,
            warning in 0.0f64..50.0,
            seed in any::<u64>(),
        ) {
            let strategy = DefenseStrategy::all()[strategy_index];
            let mut rng = StdRng::seed_from_u64(seed);
            let result = compute_defense_success(strategy, size, warning, &mut rng);
            prop_assert!(result.success_rate >= 0.3 && result.success_rate <= 0.98);
        }

        #[test]
        fn prop_size_factor_non_increasing(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(size_factor(large) <= size_factor(small));
        }

        #[test]
        fn prop_size_factor_floor(size in 1900.0f64..10000.0) {
            prop_assert!((size_factor(size) - 0.1).abs() < 1e-12);
        }

        #[test]
        fn prop_time_factor_saturates(warning in 10.0f64..100.0) {
            prop_assert!((time_factor(warning) - 1.0).abs() < 1e-12);
        }
    }
}
