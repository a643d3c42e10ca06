//! Scope storage implementations
//!
//! | Storage | Behavior |
//! |---------|----------|
//! | [`InMemoryScopeStorage`] | Caches singletons and contextual values in a concurrent map |
//! | [`NullScopeStorage`] | Caches nothing, every scoped construction runs |

pub mod memory;
pub mod null;

pub use memory::InMemoryScopeStorage;
pub use null::NullScopeStorage;
