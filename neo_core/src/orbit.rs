//! Illustrative orbit paths for the orbital map
//!
//! Each object gets a circle at its miss distance, jittered slightly and
//! tilted out of plane. This is a picture, not an ephemeris.

use crate::feed::{NeoFeed, NeoObject};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Objects drawn per approach date
pub const PER_DATE_LIMIT: usize = 5;

/// Objects drawn in total
pub const TOTAL_LIMIT: usize = 15;

/// Samples per orbit path
pub const PATH_SAMPLES: usize = 100;

/// Out-of-plane tilt as a fraction of radius
const TILT: f64 = 0.3;

/// Maximum in-plane jitter (thousand km)
const JITTER: f64 = 2.0;

/// A point in thousand-km units, Earth at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A sampled orbit path with its marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitTrack {
    pub name: String,
    pub hazardous: bool,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    /// Path radius (thousand km)
    pub radius: f64,
    pub path: Vec<Point3>,
    pub marker_size: f64,
}

impl OrbitTrack {
    /// Current position: the first sample of the path
    pub fn marker(&self) -> Point3 {
        self.path[0]
    }

    /// Hover text for the marker
    pub fn label(&self) -> String {
        format!(
            "{} | Diameter: {:.0}m | Velocity: {:.1} km/s | Hazardous: {}",
            self.name, self.diameter_m, self.velocity_km_s, self.hazardous
        )
    }
}

/// Marker size grows with diameter, never below 5
pub fn marker_size(diameter_m: f64) -> f64 {
    (diameter_m / 50.0).max(5.0)
}

/// Build a track for one object
pub fn track_for(object: &NeoObject, rng: &mut impl Rng) -> OrbitTrack {
    let radius = object.miss_distance_km / 1000.0;
    let jx = rng.gen_range(-JITTER..=JITTER);
    let jy = rng.gen_range(-JITTER..=JITTER);

    let path = (0..PATH_SAMPLES)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / (PATH_SAMPLES - 1) as f64;
            Point3 {
                x: radius * theta.cos() + jx,
                y: radius * theta.sin() + jy,
                z: theta.sin() * radius * TILT,
            }
        })
        .collect();

    OrbitTrack {
        name: object.name.clone(),
        hazardous: object.hazardous,
        diameter_m: object.diameter_m,
        velocity_km_s: object.velocity_km_s,
        radius,
        path,
        marker_size: marker_size(object.diameter_m),
    }
}

/// Tracks for the first few objects of each date, capped overall
pub fn build_tracks(feed: &NeoFeed, rng: &mut impl Rng) -> Vec<OrbitTrack> {
    feed.by_date
        .values()
        .flat_map(|objects| objects.iter().take(PER_DATE_LIMIT))
        .take(TOTAL_LIMIT)
        .map(|object| track_for(object, rng))
        .collect()
}

/// Largest extent of any track, for sizing the plot
pub fn plot_extent(tracks: &[OrbitTrack]) -> f64 {
    tracks
        .iter()
        .map(|t| t.radius + JITTER)
        .fold(EARTH_RADIUS_KM / 1000.0, f64::max)
}
