//! Synthetic stand-ins for the remote feeds

use super::{NeoFeed, NeoObject, SeismicEvent, DEFAULT_ELEMENT_COUNT};
use crate::date::{days_to_millis, CalendarDate};
use rand::Rng;
use std::collections::BTreeMap;

/// Days covered by the simulated NEO feed
pub const SIMULATED_DAYS: i64 = 7;

/// Seismically active locations used for simulated earthquakes
pub const SEISMIC_LOCATIONS: [(&str, f64, f64); 15] = [
    ("California, USA", 36.7783, -119.4179),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Indonesia", -0.7893, 113.9213),
    ("Chile", -35.6751, -71.5430),
    ("Italy", 41.8719, 12.5674),
    ("New Zealand", -40.9006, 174.8860),
    ("Greece", 39.0742, 21.8243),
    ("Turkey", 38.9637, 35.2433),
    ("Mexico", 23.6345, -102.5528),
    ("Philippines", 12.8797, 121.7740),
    ("Alaska, USA", 64.2008, -149.4937),
    ("Peru", -9.1900, -75.0152),
    ("India", 20.5937, 78.9629),
    ("Iran", 32.4279, 53.6880),
    ("Papua New Guinea", -6.3150, 143.9555),
];

/// Generate a week of simulated close approaches starting at `start`
///
/// Each day holds 3-8 objects with diameters of 50-500 m, miss distances
/// of 5-50 million km and velocities of 5-25 km/s.
pub fn simulated_neo_feed(start: CalendarDate, rng: &mut impl Rng) -> NeoFeed {
    let mut by_date = BTreeMap::new();

    for i in 0..SIMULATED_DAYS {
        let date = start.add_days(i).to_string();
        let count = rng.gen_range(3..=8);
        let objects = (0..count)
            .map(|j| NeoObject {
                id: format!("sim_{}_{}", i, j),
                name: format!("Simulated Asteroid {}-{}", i, j),
                diameter_m: rng.gen_range(50..=500) as f64,
                hazardous: rng.gen_bool(0.5),
                miss_distance_km: rng.gen_range(5_000_000..=50_000_000) as f64,
                velocity_km_s: rng.gen_range(5.0..25.0),
            })
            .collect();
        by_date.insert(date, objects);
    }

    NeoFeed {
        element_count: DEFAULT_ELEMENT_COUNT,
        by_date,
    }
}

/// Generate one simulated earthquake per known location, within the last week
pub fn simulated_seismic_events(now_millis: i64, rng: &mut impl Rng) -> Vec<SeismicEvent> {
    SEISMIC_LOCATIONS
        .iter()
        .map(|(place, latitude, longitude)| SeismicEvent {
            magnitude: round_tenth(rng.gen_range(4.5..=7.5)),
            place: place.to_string(),
            time: now_millis - days_to_millis(rng.gen_range(0..=6)),
            depth_km: round_tenth(rng.gen_range(5.0..=100.0)),
            latitude: *latitude,
            longitude: *longitude,
            significance: rng.gen_range(100..=800),
        })
        .collect()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_simulated_feed_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let start = CalendarDate::new(2025, 10, 1);
        let feed = simulated_neo_feed(start, &mut rng);

        assert_eq!(feed.element_count, 127);
        assert_eq!(feed.by_date.len(), 7);
        assert!(feed.by_date.contains_key("2025-10-01"));
        assert!(feed.by_date.contains_key("2025-10-07"));

        for objects in feed.by_date.values() {
            assert!((3..=8).contains(&objects.len()));
            for o in objects {
                assert!((50.0..=500.0).contains(&o.diameter_m));
                assert!((5_000_000.0..=50_000_000.0).contains(&o.miss_distance_km));
                assert!((5.0..25.0).contains(&o.velocity_km_s));
                assert!(o.name.starts_with("Simulated Asteroid"));
            }
        }
    }

    #[test]
    fn test_simulated_seismic_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let now = 1_760_000_000_000;
        let events = simulated_seismic_events(now, &mut rng);

        assert_eq!(events.len(), 15);
        assert_eq!(events[0].place, "California, USA");
        assert_eq!(events[14].place, "Papua New Guinea");
        for e in &events {
            assert!((4.5..=7.5).contains(&e.magnitude));
            assert!((5.0..=100.0).contains(&e.depth_km));
            assert!((100..=800).contains(&e.significance));
            assert!(e.time <= now && e.time >= now - days_to_millis(6));
            // rounded to one decimal
            assert!(((e.magnitude * 10.0).round() - e.magnitude * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_feed() {
        let start = CalendarDate::new(2025, 1, 1);
        let a = simulated_neo_feed(start, &mut ChaCha8Rng::seed_from_u64(3));
        let b = simulated_neo_feed(start, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
