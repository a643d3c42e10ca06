//! Scope storage tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use tydi_domain::{
    AnyValue, BindingId, ContextValue, ScopePolicy, ScopeRequest, ScopeStorage, TypeKey,
};
use tydi_infrastructure::scope::{InMemoryScopeStorage, NullScopeStorage};

fn compute_u32(value: u32) -> tydi_domain::Result<AnyValue> {
    Ok(Arc::new(value) as AnyValue)
}

#[test]
fn test_contextual_slots_are_per_context() {
    let storage = InMemoryScopeStorage::new();
    let key = TypeKey::provider::<u32>(None);
    let first = ContextValue::new(1u8);
    let second = ContextValue::new(1u8);
    let request = |context| ScopeRequest {
        policy: ScopePolicy::Contextual,
        key: &key,
        binding: BindingId::new(1),
        context,
    };

    let a = storage.get_or_compute(&request(&first), &mut || compute_u32(1)).unwrap();
    let b = storage.get_or_compute(&request(&second), &mut || compute_u32(2)).unwrap();
    let a_again = storage.get_or_compute(&request(&first), &mut || compute_u32(3)).unwrap();

    assert_eq!(a.downcast_ref::<u32>(), Some(&1));
    assert_eq!(b.downcast_ref::<u32>(), Some(&2));
    assert!(Arc::ptr_eq(&a, &a_again));
    assert_eq!(storage.len(), 2);

    storage.clear();
    assert!(storage.is_empty());
}

#[test]
fn test_transient_requests_are_never_cached() {
    let storage = InMemoryScopeStorage::new();
    let key = TypeKey::provider::<u32>(None);
    let global = ContextValue::global();
    let request = ScopeRequest {
        policy: ScopePolicy::Transient,
        key: &key,
        binding: BindingId::new(1),
        context: &global,
    };

    storage.get_or_compute(&request, &mut || compute_u32(1)).unwrap();
    storage.get_or_compute(&request, &mut || compute_u32(2)).unwrap();
    assert!(storage.is_empty());
}

#[test]
fn test_concurrent_first_use_computes_once() {
    let storage = Arc::new(InMemoryScopeStorage::new());
    let computed = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let storage = Arc::clone(&storage);
            let computed = Arc::clone(&computed);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let key = TypeKey::provider::<u32>(None);
                let global = ContextValue::global();
                let request = ScopeRequest {
                    policy: ScopePolicy::Singleton,
                    key: &key,
                    binding: BindingId::new(7),
                    context: &global,
                };
                barrier.wait();
                storage
                    .get_or_compute(&request, &mut || {
                        computed.fetch_add(1, Ordering::SeqCst);
                        compute_u32(99)
                    })
                    .unwrap()
            })
        })
        .collect();

    let values: Vec<AnyValue> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(computed.load(Ordering::SeqCst), 1);
    assert!(values.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn test_null_storage_always_computes() {
    let storage = NullScopeStorage::new();
    let key = TypeKey::provider::<u32>(None);
    let global = ContextValue::global();
    let request = ScopeRequest {
        policy: ScopePolicy::Singleton,
        key: &key,
        binding: BindingId::new(1),
        context: &global,
    };

    let a = storage.get_or_compute(&request, &mut || compute_u32(1)).unwrap();
    let b = storage.get_or_compute(&request, &mut || compute_u32(2)).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(storage.is_empty());
}
