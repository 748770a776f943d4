//! NEO feed statistics

use super::Histogram;
use crate::feed::{NeoFeed, NeoObject};
use serde::{Deserialize, Serialize};

/// Velocity bucket edges in km/s
pub const VELOCITY_BIN_EDGES: [f64; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0];

pub const VELOCITY_BUCKET_LABELS: [&str; 6] = [
    "0-5 km/s",
    "5-10 km/s",
    "10-15 km/s",
    "15-20 km/s",
    "20-25 km/s",
    "25+ km/s",
];

/// Number of bins in the diameter histogram
pub const SIZE_BINS: usize = 15;

/// Headline numbers for the dashboard metric cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSummary {
    /// Object count reported by the feed
    pub total_objects: u32,
    pub hazardous: usize,
    /// Parsed close approaches in the feed window
    pub close_approaches: usize,
    /// Nearest approach in the window (km)
    pub nearest_km: Option<f64>,
    /// Largest estimated diameter in the window (m)
    pub largest_m: Option<f64>,
}

impl FeedSummary {
    pub fn from_feed(feed: &NeoFeed) -> Self {
        FeedSummary {
            total_objects: feed.element_count,
            hazardous: feed.hazardous_count(),
            close_approaches: feed.object_count(),
            nearest_km: feed
                .objects()
                .map(|o| o.miss_distance_km)
                .min_by(f64::total_cmp),
            largest_m: feed.objects().map(|o| o.diameter_m).max_by(f64::total_cmp),
        }
    }
}

/// Bucket velocities into the six fixed ranges
pub fn velocity_distribution(velocities: impl IntoIterator<Item = f64>) -> Vec<(&'static str, usize)> {
    let hist = Histogram::with_edges(VELOCITY_BIN_EDGES.to_vec(), velocities);
    VELOCITY_BUCKET_LABELS
        .iter()
        .copied()
        .zip(hist.counts)
        .collect()
}

/// Diameter distribution over 15 equal-width bins
pub fn size_histogram(diameters_m: impl IntoIterator<Item = f64>) -> Histogram {
    let diameters: Vec<f64> = diameters_m.into_iter().collect();
    Histogram::equal_width(&diameters, SIZE_BINS)
}

/// (hazardous, non-hazardous) counts
pub fn hazard_split<'a>(objects: impl IntoIterator<Item = &'a NeoObject>) -> (usize, usize) {
    objects
        .into_iter()
        .fold((0, 0), |(h, n), o| if o.hazardous { (h + 1, n) } else { (h, n + 1) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;
    use crate::feed::synthetic::simulated_neo_feed;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn object(diameter: f64, hazardous: bool, miss: f64) -> NeoObject {
        NeoObject {
            id: "x".to_string(),
            name: "x".to_string(),
            diameter_m: diameter,
            hazardous,
            miss_distance_km: miss,
            velocity_km_s: 10.0,
        }
    }

    #[test]
    fn test_velocity_buckets() {
        let dist = velocity_distribution([1.0, 7.0, 7.5, 14.9, 29.0, 30.0, 31.0, -2.0]);
        assert_eq!(dist.len(), 6);
        assert_eq!(dist[0], ("0-5 km/s", 1));
        assert_eq!(dist[1], ("5-10 km/s", 2));
        assert_eq!(dist[2], ("10-15 km/s", 1));
        assert_eq!(dist[5], ("25+ km/s", 2));
    }

    #[test]
    fn test_hazard_split() {
        let objects = vec![object(10.0, true, 1.0), object(20.0, false, 2.0), object(30.0, false, 3.0)];
        assert_eq!(hazard_split(&objects), (1, 2));
    }

    #[test]
    fn test_summary() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let feed = simulated_neo_feed(CalendarDate::new(2025, 6, 1), &mut rng);
        let summary = FeedSummary::from_feed(&feed);

        assert_eq!(summary.total_objects, 127);
        assert_eq!(summary.close_approaches, feed.object_count());
        assert_eq!(summary.hazardous, feed.hazardous_count());
        assert!(summary.nearest_km.unwrap() >= 5_000_000.0);
        assert!(summary.largest_m.unwrap() <= 500.0);
    }

    #[test]
    fn test_size_histogram_counts_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let feed = simulated_neo_feed(CalendarDate::new(2025, 6, 1), &mut rng);
        let hist = size_histogram(feed.objects().map(|o| o.diameter_m));
        assert_eq!(hist.counts.len(), SIZE_BINS);
        assert_eq!(hist.total(), feed.object_count());
    }
}
