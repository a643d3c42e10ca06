//! Scope Storage Port
//!
//! Port for the component that physically caches instances of scoped
//! bindings. The resolution core hands it a request describing the binding and
//! a `compute` callback; the storage either returns its cached value or runs
//! `compute` and keeps the result according to the scope policy.
//!
//! ## Contract
//!
//! - `compute` is invoked at most once concurrently per cell
//!   (`binding` × context identity for contextual scopes, `binding` alone for
//!   singletons), under the storage's own synchronization.
//! - A failed `compute` caches nothing; the error is returned unchanged.
//! - Transient bindings never reach the storage.

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{BindingId, ContextValue, ScopePolicy, TypeKey};

/// Type-erased shared value held by scope storage
pub type AnyValue = Arc<dyn Any + Send + Sync>;

/// Description of one scoped construction
#[derive(Debug, Clone, Copy)]
pub struct ScopeRequest<'a> {
    /// Policy of the binding being constructed
    pub policy: ScopePolicy,
    /// Key the binding answers to
    pub key: &'a TypeKey,
    /// Registered binding, distinct across multi-bindings of one key
    pub binding: BindingId,
    /// Context of the resolution that triggered the construction
    pub context: &'a ContextValue,
}

/// Scope storage collaborator
///
/// # Example
///
/// ```ignore
/// let value = storage.get_or_compute(&request, &mut || {
///     Ok(Arc::new(Database::connect()?) as AnyValue)
/// })?;
/// ```
pub trait ScopeStorage: Send + Sync {
    /// Return the cached value for the request, computing it on first use
    fn get_or_compute(
        &self,
        request: &ScopeRequest<'_>,
        compute: &mut dyn FnMut() -> Result<AnyValue>,
    ) -> Result<AnyValue>;

    /// Drop every value cached for the given context
    fn release_context(&self, context: &ContextValue);

    /// Drop every cached value
    fn clear(&self);

    /// Number of cached values
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
