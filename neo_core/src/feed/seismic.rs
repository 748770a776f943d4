//! USGS earthquake summary feed

use super::FeedError;
use serde::{Deserialize, Serialize};

/// A recent earthquake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    pub magnitude: f64,
    pub place: String,
    /// Epoch milliseconds
    pub time: i64,
    /// Hypocenter depth (km)
    pub depth_km: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub significance: u32,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    properties: RawProperties,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    sig: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    /// [longitude, latitude, depth]
    coordinates: Vec<f64>,
}

impl RawFeature {
    fn into_event(self) -> Option<SeismicEvent> {
        let &[longitude, latitude, depth_km, ..] = self.geometry.coordinates.as_slice() else {
            return None;
        };
        Some(SeismicEvent {
            magnitude: self.properties.mag?,
            place: self
                .properties
                .place
                .unwrap_or_else(|| "Unknown location".to_string()),
            time: self.properties.time?,
            depth_km,
            latitude,
            longitude,
            significance: self.properties.sig.unwrap_or(0),
        })
    }
}

/// Parse a GeoJSON summary feed, keeping at most `limit` features
///
/// Features without a magnitude, time or full coordinate triple are
/// skipped; they still count against `limit` since the cut is taken in
/// feed order before conversion.
pub fn parse_seismic_feed(body: &str, limit: usize) -> Result<Vec<SeismicEvent>, FeedError> {
    let raw: RawCollection = serde_json::from_str(body)?;
    Ok(raw
        .features
        .into_iter()
        .take(limit)
        .filter_map(RawFeature::into_event)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(mag: f64, place: &str) -> String {
        format!(
            r#"{{
                "type": "Feature",
                "properties": {{ "mag": {mag}, "place": "{place}", "time": 1759300000000, "sig": 400 }},
                "geometry": {{ "type": "Point", "coordinates": [142.1, 38.3, 24.5] }}
            }}"#
        )
    }

    #[test]
    fn test_parse_features() {
        let body = format!(
            r#"{{ "type": "FeatureCollection", "features": [{}, {}] }}"#,
            feature(5.2, "near Honshu, Japan"),
            feature(4.7, "Chile")
        );
        let events = parse_seismic_feed(&body, 15).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].place, "near Honshu, Japan");
        assert!((events[0].longitude - 142.1).abs() < 1e-9);
        assert!((events[0].latitude - 38.3).abs() < 1e-9);
        assert!((events[0].depth_km - 24.5).abs() < 1e-9);
        assert_eq!(events[0].significance, 400);
    }

    #[test]
    fn test_limit_applied() {
        let features: Vec<String> = (0..20).map(|i| feature(4.5 + i as f64 * 0.1, "x")).collect();
        let body = format!(r#"{{ "features": [{}] }}"#, features.join(","));
        let events = parse_seismic_feed(&body, 15).unwrap();
        assert_eq!(events.len(), 15);
    }

    #[test]
    fn test_missing_sig_defaults_to_zero() {
        let body = r#"{ "features": [ {
            "properties": { "mag": 4.9, "place": "Fiji", "time": 1 },
            "geometry": { "coordinates": [178.0, -17.0, 550.0] }
        } ] }"#;
        let events = parse_seismic_feed(body, 15).unwrap();
        assert_eq!(events[0].significance, 0);
    }

    #[test]
    fn test_null_magnitude_skipped() {
        let body = r#"{ "features": [ {
            "properties": { "mag": null, "place": "Nowhere", "time": 1 },
            "geometry": { "coordinates": [0.0, 0.0, 10.0] }
        } ] }"#;
        assert!(parse_seismic_feed(body, 15).unwrap().is_empty());
    }
}
