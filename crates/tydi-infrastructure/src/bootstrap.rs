//! Container Bootstrap
//!
//! Composition root: turns a [`ContainerConfig`] and a populated
//! [`BindingRegistry`] into a ready [`Container`].
//!
//! ```text
//! ConfigLoader ──► ContainerConfig ─┐
//!                                   ├──► build_container ──► Container
//! BindingRegistry ──────────────────┘          │
//!                                     InMemoryScopeStorage
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//!
//! let mut registry = BindingRegistry::new();
//! registry.register(Binding::singleton(|_| Ok(Arc::new(Database::open()?))));
//!
//! let container = build_container(&config, registry)?;
//! let db: Arc<Database> = container.direct().instance(None)?;
//! ```

use crate::config::ContainerConfig;
use crate::config::loader::validate_container_config;
use crate::scope::InMemoryScopeStorage;
use crate::utils::TimedOperation;
use std::sync::Arc;
use tracing::info;
use tydi_application::{BindingRegistry, Container};
use tydi_domain::error::Result;
use tydi_domain::ports::ScopeStorage;

/// Build a container over the default in-memory scope storage
pub fn build_container(config: &ContainerConfig, registry: BindingRegistry) -> Result<Container> {
    build_container_with_storage(config, registry, Arc::new(InMemoryScopeStorage::new()))
}

/// Build a container over caller-supplied scope storage
///
/// The configured lookup policy replaces whatever policy the registry was
/// created with.
pub fn build_container_with_storage(
    config: &ContainerConfig,
    mut registry: BindingRegistry,
    scopes: Arc<dyn ScopeStorage>,
) -> Result<Container> {
    let timer = TimedOperation::start("build container");
    validate_container_config(config)?;

    registry.set_policy(config.resolution.lookup_policy);
    let container = Container::with_settings(registry, scopes, config.resolution.settings());

    info!(
        bindings = container.registry().len(),
        lookup_policy = ?config.resolution.lookup_policy,
        max_depth = config.resolution.max_depth,
        elapsed_ms = timer.elapsed_ms(),
        "Container bootstrapped"
    );
    timer.finish();
    Ok(container)
}
