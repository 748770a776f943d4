//! NASA NeoWs feed model and parsing

use super::FeedError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Object count reported when the feed omits `element_count`
pub const DEFAULT_ELEMENT_COUNT: u32 = 127;

/// One near-Earth object with its first listed close approach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoObject {
    pub id: String,
    pub name: String,
    /// Lower bound of the estimated diameter (m)
    pub diameter_m: f64,
    pub hazardous: bool,
    /// Closest approach distance (km)
    pub miss_distance_km: f64,
    /// Relative velocity at closest approach (km/s)
    pub velocity_km_s: f64,
}

/// Close-approach feed grouped by approach date (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoFeed {
    pub element_count: u32,
    pub by_date: BTreeMap<String, Vec<NeoObject>>,
}

impl NeoFeed {
    /// All objects in date order
    pub fn objects(&self) -> impl Iterator<Item = &NeoObject> {
        self.by_date.values().flatten()
    }

    pub fn object_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn hazardous_count(&self) -> usize {
        self.objects().filter(|o| o.hazardous).count()
    }

    /// Objects sorted by closest approach, nearest first
    pub fn closest(&self, limit: usize) -> Vec<&NeoObject> {
        let mut objects: Vec<&NeoObject> = self.objects().collect();
        objects.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
        objects.truncate(limit);
        objects
    }
}

#[derive(Debug, Deserialize)]
struct RawFeed {
    element_count: Option<u32>,
    #[serde(default)]
    near_earth_objects: BTreeMap<String, Vec<RawObject>>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    id: Option<String>,
    name: Option<String>,
    estimated_diameter: Option<RawDiameters>,
    is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default)]
    close_approach_data: Vec<RawApproach>,
}

#[derive(Debug, Deserialize)]
struct RawDiameters {
    meters: Option<RawRange>,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    estimated_diameter_min: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawApproach {
    miss_distance: Option<RawMissDistance>,
    relative_velocity: Option<RawVelocity>,
}

#[derive(Debug, Deserialize)]
struct RawMissDistance {
    kilometers: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVelocity {
    kilometers_per_second: Option<String>,
}

impl RawObject {
    /// Convert to a record, or `None` when a required field is missing
    /// or a numeric string does not parse
    fn into_object(self) -> Option<NeoObject> {
        let diameter_m = self.estimated_diameter?.meters?.estimated_diameter_min?;
        let approach = self.close_approach_data.into_iter().next()?;
        let miss_distance_km = approach.miss_distance?.kilometers?.trim().parse().ok()?;
        let velocity_km_s = approach
            .relative_velocity?
            .kilometers_per_second?
            .trim()
            .parse()
            .ok()?;
        Some(NeoObject {
            id: self.id?,
            name: self.name?,
            diameter_m,
            hazardous: self.is_potentially_hazardous_asteroid?,
            miss_distance_km,
            velocity_km_s,
        })
    }
}

/// Parse a NeoWs `/feed` response body
///
/// Objects with incomplete or non-numeric approach data are dropped
/// rather than failing the whole feed.
pub fn parse_neo_feed(body: &str) -> Result<NeoFeed, FeedError> {
    let raw: RawFeed = serde_json::from_str(body)?;

    let mut skipped = 0usize;
    let by_date = raw
        .near_earth_objects
        .into_iter()
        .map(|(date, objects)| {
            let parsed: Vec<NeoObject> = objects
                .into_iter()
                .filter_map(|o| {
                    let object = o.into_object();
                    if object.is_none() {
                        skipped += 1;
                    }
                    object
                })
                .collect();
            (date, parsed)
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {} incomplete NEO records", skipped);
    }

    Ok(NeoFeed {
        element_count: raw.element_count.unwrap_or(DEFAULT_ELEMENT_COUNT),
        by_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "element_count": 3,
        "near_earth_objects": {
            "2025-10-02": [
                {
                    "id": "3542519",
                    "name": "(2010 PK9)",
                    "estimated_diameter": {
                        "meters": { "estimated_diameter_min": 118.2, "estimated_diameter_max": 264.3 }
                    },
                    "is_potentially_hazardous_asteroid": true,
                    "close_approach_data": [
                        {
                            "close_approach_date": "2025-10-02",
                            "miss_distance": { "kilometers": "7346345.231" },
                            "relative_velocity": { "kilometers_per_second": "17.45" }
                        }
                    ]
                },
                {
                    "id": "9999",
                    "name": "(broken)",
                    "estimated_diameter": { "meters": { "estimated_diameter_min": 10.0 } },
                    "is_potentially_hazardous_asteroid": false,
                    "close_approach_data": []
                }
            ],
            "2025-10-01": [
                {
                    "id": "2000433",
                    "name": "433 Eros (A898 PA)",
                    "estimated_diameter": { "meters": { "estimated_diameter_min": 22000.0 } },
                    "is_potentially_hazardous_asteroid": false,
                    "close_approach_data": [
                        {
                            "miss_distance": { "kilometers": "not-a-number" },
                            "relative_velocity": { "kilometers_per_second": "5.5" }
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let feed = parse_neo_feed(SAMPLE).unwrap();
        assert_eq!(feed.element_count, 3);
        assert_eq!(feed.object_count(), 1);
        assert!(feed.by_date["2025-10-01"].is_empty());

        let pk9 = &feed.by_date["2025-10-02"][0];
        assert_eq!(pk9.name, "(2010 PK9)");
        assert!(pk9.hazardous);
        assert!((pk9.diameter_m - 118.2).abs() < 1e-9);
        assert!((pk9.miss_distance_km - 7_346_345.231).abs() < 1e-6);
        assert!((pk9.velocity_km_s - 17.45).abs() < 1e-9);
    }

    #[test]
    fn test_missing_element_count_defaults() {
        let feed = parse_neo_feed(r#"{ "near_earth_objects": {} }"#).unwrap();
        assert_eq!(feed.element_count, DEFAULT_ELEMENT_COUNT);
        assert_eq!(feed.object_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(parse_neo_feed("<html>"), Err(FeedError::Json(_))));
    }

    #[test]
    fn test_closest_sorted() {
        let mut feed = parse_neo_feed(SAMPLE).unwrap();
        let mut near = feed.by_date["2025-10-02"][0].clone();
        near.miss_distance_km = 1000.0;
        near.id = "near".to_string();
        feed.by_date.get_mut("2025-10-02").unwrap().push(near);

        let closest = feed.closest(1);
        assert_eq!(closest.len(), 1);
        assert_eq!(closest[0].id, "near");
        assert_eq!(feed.hazardous_count(), 2);
    }
}
