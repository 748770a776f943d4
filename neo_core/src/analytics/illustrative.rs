//! Illustrative series for the live dashboard
//!
//! These are not derived from any feed. They fill the monitoring charts
//! with plausible-looking numbers and are regenerated on every refresh.

use super::velocity_distribution;
use crate::date::CalendarDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Objects and years on the impact-probability heatmap
pub const WATCHLIST: [&str; 6] = ["2024 AB3", "2024 CD2", "Apophis", "Bennu", "2023 XR1", "2025 YZ4"];
pub const WATCH_YEARS: [&str; 5] = ["2024", "2025", "2026", "2027", "2028"];

/// Fixed threat-level breakdown
pub const THREAT_LEVELS: [(&str, u32); 4] =
    [("Low Risk", 45), ("Medium Risk", 28), ("High Risk", 15), ("Critical", 12)];

/// One point on the size-vs-velocity scatter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub hazardous: bool,
}

/// Draw from a normal distribution using the Box-Muller transform
pub fn sample_normal(mean: f64, std_dev: f64, rng: &mut impl Rng) -> f64 {
    // gen() is in [0, 1); flip to (0, 1] so ln never sees zero
    let u1 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Velocity buckets for 100 samples of N(15, 5) km/s
pub fn sampled_velocity_distribution(rng: &mut impl Rng) -> Vec<(&'static str, usize)> {
    let samples: Vec<f64> = (0..100).map(|_| sample_normal(15.0, 5.0, rng)).collect();
    velocity_distribution(samples)
}

/// Close approaches per 30-day step through 2025
pub fn approach_timeline(rng: &mut impl Rng) -> Vec<(CalendarDate, u32)> {
    let start = CalendarDate::new(2025, 1, 1);
    let end = CalendarDate::new(2025, 12, 31);
    let mut out = Vec::new();
    let mut date = start;
    while date <= end {
        out.push((date, rng.gen_range(1..20)));
        date = date.add_days(30);
    }
    out
}

/// 50 random objects: diameters 50-999 m, velocities 5-25 km/s, 30% hazardous
pub fn size_velocity_scatter(rng: &mut impl Rng) -> Vec<ScatterPoint> {
    (0..50)
        .map(|_| ScatterPoint {
            diameter_m: rng.gen_range(50..1000) as f64,
            velocity_km_s: rng.gen_range(5..=25) as f64,
            hazardous: rng.gen_bool(0.3),
        })
        .collect()
}

/// Impact probability grid, rows = [`WATCHLIST`], columns = [`WATCH_YEARS`]
pub fn probability_grid(rng: &mut impl Rng) -> Vec<Vec<f64>> {
    WATCHLIST
        .iter()
        .map(|_| WATCH_YEARS.iter().map(|_| rng.gen::<f64>() * 0.1).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_sample_moments() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let samples: Vec<f64> = (0..20_000).map(|_| sample_normal(15.0, 5.0, &mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        assert!((mean - 15.0).abs() < 0.2, "mean was {}", mean);
        assert!((var.sqrt() - 5.0).abs() < 0.2, "std was {}", var.sqrt());
    }

    #[test]
    fn test_sampled_distribution_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let dist = sampled_velocity_distribution(&mut rng);
        let total: usize = dist.iter().map(|(_, c)| c).sum();
        // samples outside [0, 30] are dropped
        assert!(total <= 100 && total > 90);
    }

    #[test]
    fn test_timeline_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let timeline = approach_timeline(&mut rng);
        // 2025-01-01 + 30k for k = 0..=12
        assert_eq!(timeline.len(), 13);
        assert_eq!(timeline[1].0, CalendarDate::new(2025, 1, 31));
        assert!(timeline.iter().all(|(_, n)| (1..20).contains(n)));
    }

    #[test]
    fn test_grid_shape_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let grid = probability_grid(&mut rng);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|row| row.len() == 5));
        assert!(grid.iter().flatten().all(|p| (0.0..0.1).contains(p)));
    }

    #[test]
    fn test_scatter() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let points = size_velocity_scatter(&mut rng);
        assert_eq!(points.len(), 50);
        assert!(points.iter().all(|p| (50.0..1000.0).contains(&p.diameter_m)));
    }
}
