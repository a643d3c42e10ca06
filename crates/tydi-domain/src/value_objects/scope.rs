use serde::{Deserialize, Serialize};
use std::fmt;

/// Instance reuse policy of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopePolicy {
    /// A new value on every construction
    #[default]
    Transient,
    /// One value per resolution context
    Contextual,
    /// One value for the container's lifetime
    Singleton,
}

impl ScopePolicy {
    /// Whether constructions under this policy go through scope storage
    pub fn is_cached(&self) -> bool {
        !matches!(self, Self::Transient)
    }
}

impl fmt::Display for ScopePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::Contextual => write!(f, "contextual"),
            Self::Singleton => write!(f, "singleton"),
        }
    }
}

/// Identifier assigned to a binding when it is registered
///
/// Bindings sharing a key (multi-bindings) get distinct identifiers, which is
/// what scope storage caches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

impl BindingId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
