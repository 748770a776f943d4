//! Integration test: Load config -> Fetch (offline) -> Analyze -> Simulate
//!
//! Walks the same path the dashboard takes on startup, without a network.

use neo_core::analytics::{hazard_split, size_histogram, FeedSummary, SeismicSummary};
use neo_core::date::CalendarDate;
use neo_core::defense::{MissionParameters, MissionStrategy};
use neo_core::feed::{HttpResponse, HttpTransport, OfflineTransport};
use neo_core::orbit::{build_tracks, TOTAL_LIMIT};
use neo_core::{
    compute_defense_success, DashboardConfig, DataOrigin, DefenseStrategy, FeedClient, FeedError,
    ImpactInputs, TargetMaterial,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Serves canned bodies keyed on URL substring
struct FixtureTransport;

const NEO_FIXTURE: &str = r#"{
    "element_count": 3,
    "near_earth_objects": {
        "2025-10-06": [
            {
                "id": "3542519",
                "name": "(2010 PK9)",
                "estimated_diameter": { "meters": { "estimated_diameter_min": 120.5 } },
                "is_potentially_hazardous_asteroid": true,
                "close_approach_data": [{
                    "miss_distance": { "kilometers": "6481283.12" },
                    "relative_velocity": { "kilometers_per_second": "17.45" }
                }]
            },
            {
                "id": "3726710",
                "name": "(2015 RC)",
                "estimated_diameter": { "meters": { "estimated_diameter_min": 24.2 } },
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": [{
                    "miss_distance": { "kilometers": "1203445.9" },
                    "relative_velocity": { "kilometers_per_second": "9.1" }
                }]
            }
        ],
        "2025-10-07": [
            {
                "id": "54016470",
                "name": "(2020 QW3)",
                "estimated_diameter": { "meters": { "estimated_diameter_min": 310.0 } },
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": [{
                    "miss_distance": { "kilometers": "40211876.0" },
                    "relative_velocity": { "kilometers_per_second": "22.7" }
                }]
            }
        ]
    }
}"#;

impl HttpTransport for FixtureTransport {
    fn get(&self, url: &str, _query: &[(&str, String)]) -> Result<HttpResponse, FeedError> {
        if url.contains("nasa.gov") {
            Ok(HttpResponse {
                status: 200,
                body: NEO_FIXTURE.to_string(),
            })
        } else {
            Ok(HttpResponse {
                status: 503,
                body: String::new(),
            })
        }
    }
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new("../config/dashboard.toml");
    let config = DashboardConfig::load(path).expect("shipped config should load");
    assert_eq!(config.api.feed_days, 7);
    assert!(config.api.neo_feed_url.starts_with("https://api.nasa.gov"));
    assert!((config.simulation.bulk_density - 3000.0).abs() < f64::EPSILON);
}

#[test]
fn test_offline_startup_flow() {
    let config = DashboardConfig::default();
    let client = FeedClient::new(OfflineTransport, config.api.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(2025);

    let neo = client.fetch_neo_feed(CalendarDate::new(2025, 10, 7), &mut rng);
    let seismic = client.fetch_seismic(&mut rng);
    assert_eq!(neo.origin, DataOrigin::Simulated);
    assert_eq!(seismic.origin, DataOrigin::Simulated);

    let summary = FeedSummary::from_feed(&neo.data);
    assert_eq!(summary.total_objects, 127);
    let (hazardous, safe) = hazard_split(neo.data.objects());
    assert_eq!(hazardous + safe, summary.close_approaches);
    assert_eq!(size_histogram(neo.data.objects().map(|o| o.diameter_m)).total(), summary.close_approaches);

    let quakes = SeismicSummary::from_events(&seismic.data);
    assert_eq!(quakes.count, 15);
    let largest = quakes.largest_magnitude.unwrap();
    assert!((4.5..=7.5).contains(&largest));

    let tracks = build_tracks(&neo.data, &mut rng);
    assert_eq!(tracks.len(), TOTAL_LIMIT);
}

#[test]
fn test_mixed_live_and_fallback() {
    let client = FeedClient::new(FixtureTransport, DashboardConfig::default().api);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let neo = client.fetch_neo_feed(CalendarDate::new(2025, 10, 7), &mut rng);
    assert_eq!(neo.origin, DataOrigin::Live);
    assert_eq!(neo.data.object_count(), 3);
    assert_eq!(neo.data.hazardous_count(), 1);
    assert_eq!(neo.data.closest(1)[0].name, "(2015 RC)");

    // The seismic endpoint answers 503 and falls back independently
    let seismic = client.fetch_seismic(&mut rng);
    assert_eq!(seismic.origin, DataOrigin::Simulated);

    let tracks = build_tracks(&neo.data, &mut rng);
    assert_eq!(tracks.len(), 3);
    assert!(tracks.iter().any(|t| t.hazardous));
}

#[test]
fn test_simulators_end_to_end() {
    let impact = ImpactInputs::new(500.0, 15.0, 45.0, TargetMaterial::Granite).compute();
    assert!((impact.energy_megatons - 5279.4).abs() < 1.0);
    assert!((impact.distribution.total() - 100.0).abs() < 1e-9);

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let defense = compute_defense_success(DefenseStrategy::NuclearOption, 300.0, 5.0, &mut rng);
    assert!((defense.success_rate - 0.40375).abs() < 1e-9);
    assert!(defense.miss_distance_km > 0.0);

    let mission = MissionParameters {
        strategy: MissionStrategy::CombinedApproach,
        ..MissionParameters::default()
    };
    let outcome = mission.launch(&mut rng);
    assert_eq!(outcome.report().len(), 3);
}
