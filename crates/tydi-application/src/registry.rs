//! Binding Registry
//!
//! Maps a [`TypeKey`] to the bindings registered under it. Several bindings may
//! share a key (multi-binding); they are kept in registration order.
//!
//! ## Lookups
//!
//! ```text
//! register(B1: K) ─┐
//! register(B2: K) ─┼──►  K → [B1, B2, B3]
//! register(B3: K) ─┘
//!
//! lookup_one(K)  → B3        (LookupPolicy::LastRegistered)
//!                → B1        (LookupPolicy::FirstRegistered)
//! lookup_all(K)  → [B1, B2, B3]
//! lookup_all(K') → []
//! ```
//!
//! "Not found" is an absence here, never an error; required retrievals raise
//! `Error::NotFound` one layer up.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tydi_domain::value_objects::{BindingId, TypeIdentity, TypeKey};

use crate::binding::{Binding, ErasedBinding};

/// Which binding `lookup_one` answers with when several share a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Later registrations override earlier ones
    #[default]
    LastRegistered,
    /// The first registration wins; later ones only show up in `lookup_all`
    FirstRegistered,
}

/// Registry of bindings keyed by [`TypeKey`]
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: HashMap<TypeKey, Vec<ErasedBinding>>,
    /// Keys in order of first registration
    order: Vec<TypeKey>,
    next_id: u64,
    policy: LookupPolicy,
}

impl BindingRegistry {
    /// Create an empty registry with the default lookup policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given lookup policy
    pub fn with_policy(policy: LookupPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LookupPolicy) {
        self.policy = policy;
    }

    /// Register a binding under its key, after any binding already there
    ///
    /// Registering an equivalent binding twice is not detected; preventing
    /// duplicates is the configuration layer's job.
    pub fn register<A, T>(&mut self, binding: Binding<A, T>) -> BindingId
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        self.next_id += 1;
        let id = BindingId::new(self.next_id);
        let erased = ErasedBinding::new(id, binding);
        let key = erased.key().clone();

        debug!(key = %key, binding = %id, scope = %erased.scope(), "Registering binding");

        let entries = self.bindings.entry(key.clone()).or_default();
        if entries.is_empty() {
            self.order.push(key);
        }
        entries.push(erased);
        id
    }

    /// The binding answering `key` under the registry's lookup policy
    pub fn lookup_one(&self, key: &TypeKey) -> Option<&ErasedBinding> {
        let entries = self.bindings.get(key)?;
        match self.policy {
            LookupPolicy::LastRegistered => entries.last(),
            LookupPolicy::FirstRegistered => entries.first(),
        }
    }

    /// Every binding registered under `key`, in registration order
    pub fn lookup_all(&self, key: &TypeKey) -> &[ErasedBinding] {
        self.bindings.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registered keys sharing `return_type`, in registration order
    pub fn candidates_for(&self, return_type: TypeIdentity) -> Vec<TypeKey> {
        self.order
            .iter()
            .filter(|key| key.return_type() == return_type)
            .cloned()
            .collect()
    }

    /// Registered keys in order of first registration
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.order.iter()
    }

    /// Total number of registered bindings
    pub fn len(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
