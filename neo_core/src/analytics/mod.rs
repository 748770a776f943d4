//! Chart-ready series derived from feed data

mod histogram;
pub mod illustrative;
mod neo_stats;
mod seismic_stats;

pub use histogram::Histogram;
pub use neo_stats::{
    hazard_split, size_histogram, velocity_distribution, FeedSummary, VELOCITY_BIN_EDGES,
    VELOCITY_BUCKET_LABELS,
};
pub use seismic_stats::SeismicSummary;
