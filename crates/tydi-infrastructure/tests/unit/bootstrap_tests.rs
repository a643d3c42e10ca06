//! Bootstrap tests

use std::sync::Arc;

use tydi_application::{Binding, BindingRegistry};
use tydi_domain::{Error, ScopeStorage};
use tydi_infrastructure::bootstrap::{build_container, build_container_with_storage};
use tydi_infrastructure::config::ContainerConfig;
use tydi_infrastructure::scope::NullScopeStorage;

#[derive(Debug)]
struct Database;

fn registry() -> BindingRegistry {
    let mut registry = BindingRegistry::new();
    registry.register(Binding::<(), Arc<Database>>::singleton(|_| Ok(Arc::new(Database))));
    registry
}

#[test]
fn test_build_container_applies_settings() {
    let mut config = ContainerConfig::default();
    config.resolution.max_depth = 16;

    let container = build_container(&config, registry()).expect("Should build container");
    assert_eq!(container.settings().max_depth, 16);
    assert_eq!(container.registry().len(), 1);
}

#[test]
fn test_default_storage_caches_singletons() {
    let container =
        build_container(&ContainerConfig::default(), registry()).expect("Should build container");
    let a: Arc<Database> = container.direct().instance(None).unwrap();
    let b: Arc<Database> = container.direct().instance(None).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(container.scopes().len(), 1);
}

#[test]
fn test_custom_storage_is_used() {
    let container = build_container_with_storage(
        &ContainerConfig::default(),
        registry(),
        Arc::new(NullScopeStorage::new()),
    )
    .expect("Should build container");

    let a: Arc<Database> = container.direct().instance(None).unwrap();
    let b: Arc<Database> = container.direct().instance(None).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = ContainerConfig::default();
    config.logging.level = "loud".to_string();
    let err = build_container(&config, registry()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
