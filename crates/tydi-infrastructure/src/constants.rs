//! Infrastructure layer constants
//!
//! Constants used by configuration loading, logging and scope storage. Resolution constants
//! are defined in `tydi_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tydi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tydi";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TYDI";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TYDI_LOG";

// ============================================================================
// RESOLUTION LIMITS
// ============================================================================

/// Smallest accepted maximum construction depth
pub const MIN_CONSTRUCTION_DEPTH: usize = 1;

/// Largest accepted maximum construction depth, bounded by a 2 MiB thread stack
pub const MAX_CONSTRUCTION_DEPTH: usize = 512;

// ============================================================================
// SCOPE STORAGE CONSTANTS
// ============================================================================

/// Slot count at which the in-memory storage first sweeps slots of dropped contexts
pub const CONTEXT_SWEEP_THRESHOLD: usize = 64;
