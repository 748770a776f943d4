//! Prelude module for convenient imports
//!
//! ```rust
//! use neo_core::prelude::*;
//! ```

// Calculators
pub use crate::impact::{compute_impact_effects, ImpactInputs, ImpactResult};
pub use crate::defense::{compute_defense_success, DefenseInputs, DefenseResult, EarthSafety};

// Mission
pub use crate::defense::{BudgetTier, MissionOutcome, MissionParameters, MissionStrategy};

// Labels
pub use crate::types::{DefenseStrategy, EffectCategory, LookupError, TargetMaterial};

// Feeds
pub use crate::feed::{DataOrigin, FeedClient, NeoFeed, NeoObject, SeismicEvent, Sourced};

// Config
pub use crate::config::DashboardConfig;
