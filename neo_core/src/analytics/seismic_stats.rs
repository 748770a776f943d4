//! Seismic feed statistics

use crate::feed::SeismicEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicSummary {
    pub count: usize,
    pub largest_magnitude: Option<f64>,
    pub average_depth_km: Option<f64>,
}

impl SeismicSummary {
    pub fn from_events(events: &[SeismicEvent]) -> Self {
        let average_depth_km = if events.is_empty() {
            None
        } else {
            Some(events.iter().map(|e| e.depth_km).sum::<f64>() / events.len() as f64)
        };

        SeismicSummary {
            count: events.len(),
            largest_magnitude: events.iter().map(|e| e.magnitude).max_by(f64::total_cmp),
            average_depth_km,
        }
    }
}
