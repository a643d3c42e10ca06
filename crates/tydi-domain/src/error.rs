//! Error handling types

use thiserror::Error;

use crate::constants::CYCLE_SEPARATOR;
use crate::value_objects::TypeKey;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the resolution core
#[derive(Error, Debug)]
pub enum Error {
    /// A required retrieval found no binding for the key
    #[error("No binding found for {key}{}", render_candidates(.candidates))]
    NotFound {
        /// The key that was requested
        key: TypeKey,
        /// Registered keys sharing the requested return type
        candidates: Vec<TypeKey>,
    },

    /// Constructing the key would re-enter a construction already in progress
    #[error("Dependency recursion: {}", render_cycle(.cycle))]
    DependencyLoop {
        /// The chain of keys, starting and ending with the repeated key
        cycle: Vec<TypeKey>,
    },

    /// The construction chain grew deeper than the configured maximum
    #[error("Construction depth {depth} exceeded while constructing {key}")]
    DepthExceeded {
        /// The key whose construction would have exceeded the limit
        key: TypeKey,
        /// The configured maximum depth
        depth: usize,
    },

    /// Failure raised by a binding's construction function
    #[error("Construction failed: {message}")]
    Construction {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A binding or cached value did not have the type its key promised
    #[error("Type mismatch for {key}")]
    TypeMismatch {
        /// The key whose value had the wrong type
        key: TypeKey,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn render_candidates(candidates: &[TypeKey]) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    format!(". Registered with the same type: [{}]", listed.join(", "))
}

fn render_cycle(cycle: &[TypeKey]) -> String {
    let listed: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    listed.join(CYCLE_SEPARATOR)
}

// Resolution error creation methods
impl Error {
    /// Create a not found error without candidates
    pub fn not_found(key: TypeKey) -> Self {
        Self::NotFound {
            key,
            candidates: Vec::new(),
        }
    }

    /// Create a not found error listing keys with the same return type
    pub fn not_found_with_candidates(key: TypeKey, candidates: Vec<TypeKey>) -> Self {
        Self::NotFound { key, candidates }
    }

    /// Create a dependency loop error from the offending chain
    pub fn dependency_loop(cycle: Vec<TypeKey>) -> Self {
        Self::DependencyLoop { cycle }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(key: TypeKey) -> Self {
        Self::TypeMismatch { key }
    }

    /// Whether this error means "no binding" rather than a defect
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is a detected dependency loop
    pub fn is_loop(&self) -> bool {
        matches!(self, Self::DependencyLoop { .. })
    }
}

// Construction error creation methods
impl Error {
    /// Create a construction error
    pub fn construction<S: Into<String>>(message: S) -> Self {
        Self::Construction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error with source
    pub fn construction_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Construction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
