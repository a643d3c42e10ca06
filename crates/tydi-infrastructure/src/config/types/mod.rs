//! Configuration types module

pub mod logging;
pub mod resolution;

pub use logging::LoggingConfig;
pub use resolution::ResolutionConfig;

use serde::{Deserialize, Serialize};

/// Root configuration of a container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Retrieval engine settings
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
