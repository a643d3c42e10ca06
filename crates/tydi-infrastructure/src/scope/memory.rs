//! In-memory scope storage
//!
//! One [`OnceCell`] per cache slot. The map shard lock is only held while the
//! cell is looked up or inserted; construction runs outside it, so a value
//! under construction may resolve other scoped values without deadlocking the
//! map.
//!
//! Contextual slots hold their context weakly. Slots whose context has been
//! dropped are swept when the slot count doubles and before counting.

use crate::constants::CONTEXT_SWEEP_THRESHOLD;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};
use tydi_domain::error::Result;
use tydi_domain::ports::{AnyValue, ScopeRequest, ScopeStorage};
use tydi_domain::value_objects::{
    BindingId, ContextId, ContextValue, ScopePolicy, WeakContextValue,
};

type SlotKey = (BindingId, ContextId);

struct Slot {
    policy: ScopePolicy,
    cell: Arc<OnceCell<AnyValue>>,
    // Holds the context allocation, so its id stays unique while the slot exists.
    context: WeakContextValue,
}

impl Slot {
    fn is_live(&self) -> bool {
        self.policy != ScopePolicy::Contextual || self.context.is_alive()
    }
}

/// Concurrent scope storage backed by [`DashMap`]
///
/// Singletons live in one slot per binding. Contextual values live in one
/// slot per binding and context identity, until
/// [`release_context`](ScopeStorage::release_context) drops them or the
/// context value itself is dropped.
pub struct InMemoryScopeStorage {
    slots: DashMap<SlotKey, Slot>,
    next_sweep: AtomicUsize,
}

impl InMemoryScopeStorage {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            next_sweep: AtomicUsize::new(CONTEXT_SWEEP_THRESHOLD),
        }
    }

    /// Cell for the request's slot, and whether the slot was just created
    fn cell_for(&self, request: &ScopeRequest<'_>) -> (Arc<OnceCell<AnyValue>>, bool) {
        let (context_id, context) = match request.policy {
            ScopePolicy::Contextual => (request.context.id(), request.context.downgrade()),
            _ => (ContextId::GLOBAL, ContextValue::global().downgrade()),
        };
        let mut inserted = false;
        let slot = self
            .slots
            .entry((request.binding, context_id))
            .or_insert_with(|| {
                inserted = true;
                Slot {
                    policy: request.policy,
                    cell: Arc::new(OnceCell::new()),
                    context,
                }
            });
        (Arc::clone(&slot.cell), inserted)
    }

    /// Drop slots whose context is gone. Must not run while a map guard is held.
    fn sweep_dead(&self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| slot.is_live());
        let swept = before.saturating_sub(self.slots.len());
        if swept > 0 {
            debug!(swept, "Dropped contexts swept from scope storage");
        }
        swept
    }

    fn maybe_sweep(&self) {
        if self.slots.len() < self.next_sweep.load(Ordering::Relaxed) {
            return;
        }
        self.sweep_dead();
        let next = (self.slots.len() * 2).max(CONTEXT_SWEEP_THRESHOLD);
        self.next_sweep.store(next, Ordering::Relaxed);
    }
}

impl Default for InMemoryScopeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStorage for InMemoryScopeStorage {
    fn get_or_compute(
        &self,
        request: &ScopeRequest<'_>,
        compute: &mut dyn FnMut() -> Result<AnyValue>,
    ) -> Result<AnyValue> {
        if !request.policy.is_cached() {
            return compute();
        }

        let (cell, inserted) = self.cell_for(request);
        if inserted && request.policy == ScopePolicy::Contextual {
            self.maybe_sweep();
        }
        let value = cell.get_or_try_init(|| {
            trace!(
                key = %request.key,
                binding = %request.binding,
                policy = %request.policy,
                "Scope miss"
            );
            compute()
        })?;
        Ok(Arc::clone(value))
    }

    fn release_context(&self, context: &ContextValue) {
        let id = context.id();
        let before = self.slots.len();
        self.slots.retain(|(_, slot_context), slot| {
            slot.is_live() && (slot.policy != ScopePolicy::Contextual || *slot_context != id)
        });
        debug!(
            context = ?context,
            released = before.saturating_sub(self.slots.len()),
            "Context scope released"
        );
    }

    fn clear(&self) {
        self.slots.clear();
    }

    fn len(&self) -> usize {
        self.sweep_dead();
        self.slots
            .iter()
            .filter(|slot| slot.value().cell.get().is_some())
            .count()
    }
}
