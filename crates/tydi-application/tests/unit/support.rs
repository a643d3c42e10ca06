//! Shared fixtures for the retrieval suites

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tydi_application::{BindingRegistry, Container, ResolutionSettings};
use tydi_infrastructure::InMemoryScopeStorage;

/// Container over the default in-memory scope storage
pub fn container(registry: BindingRegistry) -> Container {
    Container::new(registry, Arc::new(InMemoryScopeStorage::new()))
}

/// Container with a custom construction depth limit
pub fn container_with_depth(registry: BindingRegistry, max_depth: usize) -> Container {
    Container::with_settings(
        registry,
        Arc::new(InMemoryScopeStorage::new()),
        ResolutionSettings { max_depth },
    )
}

/// Shared invocation counter for construction functions
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
