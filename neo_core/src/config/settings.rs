//! Dashboard settings

use super::ConfigError;
use crate::impact::constants::{BULK_DENSITY, JOULES_PER_MEGATON};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the configured NASA API key
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub simulation: SimulationConstants,
}

impl DashboardConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: DashboardConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.feed_days == 0 {
            return Err(ConfigError::ValidationError(
                "api.feed_days must be at least 1".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.simulation.bulk_density <= 0.0 {
            return Err(ConfigError::ValidationError(
                "simulation.bulk_density must be positive".to_string(),
            ));
        }
        if self.simulation.joules_per_megaton <= 0.0 {
            return Err(ConfigError::ValidationError(
                "simulation.joules_per_megaton must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the API key with `NASA_API_KEY` when it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api.nasa_api_key = key;
            }
        }
        self
    }
}

/// Remote feed endpoints and request tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_key")]
    pub nasa_api_key: String,
    #[serde(default = "default_neo_feed_url")]
    pub neo_feed_url: String,
    #[serde(default = "default_seismic_feed_url")]
    pub seismic_feed_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Length of the NEO feed window, ending today
    #[serde(default = "default_feed_days")]
    pub feed_days: u32,
    /// Maximum number of seismic events kept from the live feed
    #[serde(default = "default_seismic_limit")]
    pub seismic_limit: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            nasa_api_key: default_api_key(),
            neo_feed_url: default_neo_feed_url(),
            seismic_feed_url: default_seismic_feed_url(),
            timeout_secs: default_timeout_secs(),
            feed_days: default_feed_days(),
            seismic_limit: default_seismic_limit(),
        }
    }
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}
fn default_neo_feed_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}
fn default_seismic_feed_url() -> String {
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_week.geojson".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_feed_days() -> u32 {
    7
}
fn default_seismic_limit() -> usize {
    15
}

/// Physical assumptions behind the impact calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConstants {
    /// Asteroid bulk density in kg/m³
    #[serde(default = "default_bulk_density")]
    pub bulk_density: f64,
    /// Joules per megaton of TNT
    #[serde(default = "default_joules_per_megaton")]
    pub joules_per_megaton: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            bulk_density: default_bulk_density(),
            joules_per_megaton: default_joules_per_megaton(),
        }
    }
}

fn default_bulk_density() -> f64 {
    BULK_DENSITY
}
fn default_joules_per_megaton() -> f64 {
    JOULES_PER_MEGATON
}
