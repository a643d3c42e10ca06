//! Domain layer constants
//!
//! Constants that are part of the resolution semantics. Infrastructure-specific
//! constants (file names, environment prefixes) live in
//! `tydi_infrastructure::constants`.

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Default maximum number of nested constructions on one call path
///
/// Each nested construction costs several stack frames; this default fits a
/// 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_CONSTRUCTION_DEPTH: usize = 256;

/// Separator used when rendering a dependency cycle
pub const CYCLE_SEPARATOR: &str = " -> ";

/// Label rendered for the global (default) resolution context
pub const GLOBAL_CONTEXT_LABEL: &str = "global";
