//! Configuration file to retrieval, through the facade only

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use tydi::{
    Binding, BindingRegistry, ConfigLoader, ContextValue, Error, LookupPolicy, Receiver, Tag,
    build_container,
};

#[derive(Debug)]
struct Repository {
    table: String,
}

#[derive(Debug, Clone)]
struct Audit {
    actor: String,
}

fn registry() -> BindingRegistry {
    let mut registry = BindingRegistry::new();
    registry.register(Binding::<String, Arc<Repository>>::factory(|_, table| {
        Ok(Arc::new(Repository { table }))
    }));
    registry.register(Binding::<(), Arc<Repository>>::singleton(|resolver| {
        resolver.instance_with_arg(None, "users".to_string())
    }));
    registry.register(Binding::<(), Audit>::provider(|resolver| {
        let actor = resolver
            .receiver()
            .and_then(|receiver| receiver.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "system".to_string());
        Ok(Audit { actor })
    }));
    registry.register(Binding::<(), u8>::instance(1).with_tag("version"));
    registry.register(Binding::<(), u8>::instance(2).with_tag("version"));
    registry
}

#[test]
fn test_configured_container_serves_all_shapes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tydi.toml");
    fs::write(
        &path,
        "[resolution]\nlookup_policy = \"first_registered\"\nmax_depth = 32\n",
    )
    .expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");
    assert_eq!(config.resolution.lookup_policy, LookupPolicy::FirstRegistered);

    let container = build_container(&config, registry()).expect("Should build container");
    let resolver = container.direct();

    let repository: Arc<Repository> = resolver.instance(None).unwrap();
    assert_eq!(repository.table, "users");
    let again = resolver.provider::<Arc<Repository>>(None).unwrap().get().unwrap();
    assert!(Arc::ptr_eq(&repository, &again));

    let version: u8 = resolver.instance(Some(Tag::from("version"))).unwrap();
    assert_eq!(version, 1, "first registered binding wins under the configured policy");
    let versions: Vec<u8> = resolver.all_instances(Some(Tag::from("version"))).unwrap();
    assert_eq!(versions, vec![1, 2]);

    let audit: Audit = container
        .direct()
        .on_context(ContextValue::new("request-1"))
        .on_receiver(Receiver::new("alice".to_string()))
        .instance(None)
        .unwrap();
    assert_eq!(audit.actor, "alice");

    let missing = resolver.instance::<Audit>(Some(Tag::from("nope"))).unwrap_err();
    assert!(matches!(missing, Error::NotFound { .. }));
}
