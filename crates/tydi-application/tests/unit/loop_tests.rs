//! Dependency loop detection

use std::sync::{Arc, Barrier};
use std::thread;

use tydi_application::{Binding, BindingRegistry, LoopGuard};
use tydi_domain::constants::DEFAULT_MAX_CONSTRUCTION_DEPTH;
use tydi_domain::{Error, Tag, TypeKey};

use crate::support::{container, container_with_depth};

#[derive(Debug, Clone)]
struct Left;

#[derive(Debug, Clone)]
struct Right;

fn two_cycle() -> BindingRegistry {
    let mut registry = BindingRegistry::new();
    registry.register(Binding::<(), Left>::provider(|resolver| {
        resolver.instance::<Right>(None)?;
        Ok(Left)
    }));
    registry.register(Binding::<(), Right>::provider(|resolver| {
        resolver.instance::<Left>(None)?;
        Ok(Right)
    }));
    registry
}

#[test]
fn test_two_cycle_reports_full_path() {
    let resolver = container(two_cycle()).direct();
    let left = TypeKey::provider::<Left>(None);
    let right = TypeKey::provider::<Right>(None);

    match resolver.instance::<Left>(None) {
        Err(Error::DependencyLoop { cycle }) => {
            assert_eq!(cycle, vec![left.clone(), right, left]);
        }
        other => panic!("Expected DependencyLoop, got {:?}", other.err()),
    }
    assert_eq!(LoopGuard::depth(), 0, "stack must be empty after a failed retrieval");
}

#[test]
fn test_self_loop_is_detected() {
    let mut registry = BindingRegistry::new();
    registry.register(Binding::<(), Left>::provider(|resolver| {
        resolver.instance::<Left>(None)?;
        Ok(Left)
    }));
    let err = container(registry).direct().instance::<Left>(None).unwrap_err();
    assert!(err.is_loop());
    assert_eq!(
        err.to_string(),
        format!(
            "Dependency recursion: {0} -> {0}",
            TypeKey::provider::<Left>(None)
        )
    );
}

#[test]
fn test_optional_retrieval_still_surfaces_loops() {
    let resolver = container(two_cycle()).direct();
    let err = resolver.instance_or_none::<Left>(None).unwrap_err();
    assert!(err.is_loop());
}

#[test]
fn test_provider_retrieval_defers_loop_until_called() {
    let resolver = container(two_cycle()).direct();
    let provider = resolver.provider::<Left>(None).expect("retrieval does not construct");
    assert!(provider.get().unwrap_err().is_loop());
}

#[test]
fn test_repeated_acyclic_dependency_is_not_a_loop() {
    #[derive(Debug, Clone)]
    struct Pair(u8, u8);

    let mut registry = BindingRegistry::new();
    registry.register(Binding::<(), u8>::instance(4));
    registry.register(Binding::<(), Pair>::provider(|resolver| {
        Ok(Pair(resolver.instance(None)?, resolver.instance(None)?))
    }));

    let pair: Pair = container(registry).direct().instance(None).unwrap();
    assert_eq!((pair.0, pair.1), (4, 4));
}

#[test]
fn test_depth_limit_stops_unbounded_chains() {
    let mut registry = BindingRegistry::new();
    for level in 0..10u32 {
        registry.register(
            Binding::<(), u32>::provider(move |resolver| {
                resolver.instance::<u32>(Some(Tag::from(level + 1)))?;
                Ok(level)
            })
            .with_tag(level),
        );
    }

    let err = container_with_depth(registry, 4)
        .direct()
        .instance::<u32>(Some(Tag::from(0u32)))
        .unwrap_err();
    match err {
        Error::DepthExceeded { key, depth } => {
            assert_eq!(depth, 4);
            assert_eq!(key, TypeKey::provider::<u32>(Some(Tag::from(4u32))));
        }
        other => panic!("Expected DepthExceeded, got {other:?}"),
    }
}

#[test]
fn test_default_depth_limit_fits_a_small_thread_stack() {
    let mut registry = BindingRegistry::new();
    for level in 0..2000u32 {
        registry.register(
            Binding::<(), u32>::provider(move |resolver| {
                resolver.instance::<u32>(Some(Tag::from(level + 1)))?;
                Ok(level)
            })
            .with_tag(level),
        );
    }
    let resolver = container(registry).direct();

    let result = thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(move || resolver.instance::<u32>(Some(Tag::from(0u32))))
        .expect("spawn resolver thread")
        .join()
        .expect("resolver thread overflowed its stack");

    match result {
        Err(Error::DepthExceeded { depth, .. }) => {
            assert_eq!(depth, DEFAULT_MAX_CONSTRUCTION_DEPTH);
        }
        other => panic!("Expected DepthExceeded, got {other:?}"),
    }
}

#[test]
fn test_concurrent_constructions_do_not_see_each_other() {
    #[derive(Debug, Clone)]
    struct Slow;

    let barrier = Arc::new(Barrier::new(2));
    let mut registry = BindingRegistry::new();
    {
        let barrier = Arc::clone(&barrier);
        registry.register(Binding::<(), Slow>::provider(move |_| {
            // Both threads are inside the same construction here.
            barrier.wait();
            Ok(Slow)
        }));
    }
    let container = container(registry);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let resolver = container.direct();
            thread::spawn(move || resolver.instance::<Slow>(None).map(|_| ()))
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("thread panicked")
            .expect("no false loop across threads");
    }
}
