//! Remote data feeds with synthetic fallback
//!
//! Two feeds back the dashboard: the NASA NeoWs close-approach feed and the
//! USGS weekly M4.5+ earthquake summary. Either one may be unreachable, rate
//! limited, or malformed; in every such case the fetch produces locally
//! generated data of the same shape, tagged [`DataOrigin::Simulated`].

mod client;
mod neo;
mod seismic;
pub mod synthetic;

pub use client::{FeedClient, HttpResponse, HttpTransport, OfflineTransport, ReqwestTransport};
pub use neo::{parse_neo_feed, NeoFeed, NeoObject, DEFAULT_ELEMENT_COUNT};
pub use seismic::{parse_seismic_feed, SeismicEvent};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feed retrieval error
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Failed to parse feed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Feed is offline")]
    Offline,
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Transport(err.to_string())
    }
}

/// Where a piece of feed data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Simulated,
}

impl DataOrigin {
    pub fn is_live(&self) -> bool {
        matches!(self, DataOrigin::Live)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Live => "Live NASA Data",
            DataOrigin::Simulated => "Simulated Data",
        }
    }

    /// Source-neutral form for feeds other than NASA's
    pub fn short_label(&self) -> &'static str {
        match self {
            DataOrigin::Live => "Live",
            DataOrigin::Simulated => "Simulated",
        }
    }
}

/// Feed data tagged with its origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub origin: DataOrigin,
    pub data: T,
    /// Epoch milliseconds when the data was produced
    pub fetched_at: i64,
}

impl<T> Sourced<T> {
    pub fn live(data: T, fetched_at: i64) -> Self {
        Sourced {
            origin: DataOrigin::Live,
            data,
            fetched_at,
        }
    }

    pub fn simulated(data: T, fetched_at: i64) -> Self {
        Sourced {
            origin: DataOrigin::Simulated,
            data,
            fetched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_labels() {
        assert_eq!(DataOrigin::Live.label(), "Live NASA Data");
        assert_eq!(DataOrigin::Live.short_label(), "Live");
        assert_eq!(DataOrigin::Simulated.short_label(), "Simulated");
        assert!(!DataOrigin::Live.short_label().contains("NASA"));
    }
}
