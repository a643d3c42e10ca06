//! Error context extension tests

use std::sync::Arc;

use tydi_application::{Binding, BindingRegistry};
use tydi_domain::Error;
use tydi_infrastructure::build_container;
use tydi_infrastructure::config::ContainerConfig;
use tydi_infrastructure::error_ext::ErrorContext;

#[test]
fn test_construction_context_surfaces_through_retrieval() {
    let mut registry = BindingRegistry::new();
    registry.register(Binding::<(), Arc<u16>>::singleton(|_| {
        let port: u16 = "not-a-port"
            .parse()
            .construction_context("Failed to parse the listen port")?;
        Ok(Arc::new(port))
    }));
    let container = build_container(&ContainerConfig::default(), registry).unwrap();

    let err = container.direct().instance::<Arc<u16>>(None).unwrap_err();
    match err {
        Error::Construction { message, source } => {
            assert!(message.starts_with("Failed to parse the listen port: "));
            assert!(source.is_some());
        }
        other => panic!("Expected Construction error, got {other:?}"),
    }
}

#[test]
fn test_with_context_formats_lazily() {
    let result: Result<u16, std::num::ParseIntError> = "8080".parse();
    let port = result
        .with_context(|| format!("port for {}", "api"))
        .unwrap();
    assert_eq!(port, 8080);

    let result: Result<u16, std::num::ParseIntError> = "x".parse();
    let err = result.with_context(|| format!("port for {}", "api")).unwrap_err();
    assert!(err.to_string().contains("port for api"));
}
