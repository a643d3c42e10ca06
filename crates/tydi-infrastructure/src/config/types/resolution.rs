//! Retrieval engine configuration types

use serde::{Deserialize, Serialize};
use tydi_application::{LookupPolicy, ResolutionSettings};
use tydi_domain::constants::DEFAULT_MAX_CONSTRUCTION_DEPTH;

/// Retrieval engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Which binding answers a single lookup when several share a key
    pub lookup_policy: LookupPolicy,

    /// Maximum number of nested constructions on one call path
    pub max_depth: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            lookup_policy: LookupPolicy::default(),
            max_depth: DEFAULT_MAX_CONSTRUCTION_DEPTH,
        }
    }
}

impl ResolutionConfig {
    /// Engine settings derived from this configuration
    pub fn settings(&self) -> ResolutionSettings {
        ResolutionSettings {
            max_depth: self.max_depth,
        }
    }
}
