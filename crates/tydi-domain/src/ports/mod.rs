//! Domain Port Interfaces
//!
//! Boundary contracts the resolution core depends on and outer layers
//! implement. The core never caches instances itself: every construction of a
//! cached-scope binding is routed through [`ScopeStorage`].

/// Scope storage port
pub mod scope;

pub use scope::{AnyValue, ScopeRequest, ScopeStorage};
