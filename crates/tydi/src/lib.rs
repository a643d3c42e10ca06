//! # tydi
//!
//! Type-keyed dependency retrieval. Bindings are registered under a
//! `{return type, argument type, tag}` key and retrieved as factories,
//! providers or instances, directly or on behalf of a context and receiver.
//!
//! ## Features
//!
//! - **Three retrieval shapes**: factories taking an argument, argument-free
//!   providers, and ready instances
//! - **Optional and multi retrieval**: `*_or_none` and `all_*` variants
//! - **Scopes**: transient, per-context and singleton bindings
//! - **Loop detection**: circular constructions fail with the full cycle
//!   instead of overflowing the stack
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tydi::{Binding, BindingRegistry, ConfigLoader, build_container};
//!
//! let mut registry = BindingRegistry::new();
//! registry.register(Binding::singleton(|_| Ok(Arc::new(Settings::default()))));
//! registry.register(Binding::factory(|resolver, name: String| {
//!     Ok(Greeter::new(resolver.instance::<Arc<Settings>>(None)?, name))
//! }));
//!
//! let container = build_container(&ConfigLoader::new().load()?, registry)?;
//! let greeter: Greeter = container.direct().instance_with_arg(None, "world".to_string())?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, tags, context values, the scope storage port and errors
//! - `application` - bindings, registry, loop guard and the retrieval engine
//! - `infrastructure` - scope storage, configuration, logging and bootstrap

/// Domain layer - keys, values and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tydi_domain::*;
}

/// Application layer - registry and retrieval engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tydi_application::*;
}

/// Infrastructure layer - scope storage, config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tydi_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::{
    ContextValue, Error, Receiver, Result, ScopePolicy, Tag, TypeKey, TypeToken, generic,
};

pub use application::{
    Binding, BindingRegistry, Container, ContextSelector, DirectResolver, Factory, LookupPolicy,
    Provider, ReceiverSelector, ResolverAware,
};

pub use infrastructure::{
    ConfigLoader, ContainerConfig, ErrorContext, InMemoryScopeStorage, NullScopeStorage,
    build_container,
};
