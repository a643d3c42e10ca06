//! Null scope storage
//!
//! Runs every construction and keeps nothing. Useful when a test wants each
//! retrieval to observe a fresh value regardless of declared scopes.

use tydi_domain::error::Result;
use tydi_domain::ports::{AnyValue, ScopeRequest, ScopeStorage};
use tydi_domain::value_objects::ContextValue;

/// Scope storage that never caches
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScopeStorage;

impl NullScopeStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ScopeStorage for NullScopeStorage {
    fn get_or_compute(
        &self,
        _request: &ScopeRequest<'_>,
        compute: &mut dyn FnMut() -> Result<AnyValue>,
    ) -> Result<AnyValue> {
        compute()
    }

    fn release_context(&self, _context: &ContextValue) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}
