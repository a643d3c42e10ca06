use std::fmt;
use std::sync::Arc;

use tracing::debug;
use tydi_domain::constants::DEFAULT_MAX_CONSTRUCTION_DEPTH;
use tydi_domain::ports::ScopeStorage;
use tydi_domain::value_objects::ContextValue;

use crate::context::{ContextSelector, ReceiverSelector, ResolutionContext};
use crate::registry::BindingRegistry;

use super::resolver::{DirectResolver, ResolverAware};

/// Tunables of the retrieval engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSettings {
    /// Maximum number of nested constructions on one call path
    pub max_depth: usize,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_CONSTRUCTION_DEPTH,
        }
    }
}

/// Shared, read-only state behind every resolver of a container
pub(crate) struct ContainerState {
    pub(crate) registry: BindingRegistry,
    pub(crate) scopes: Arc<dyn ScopeStorage>,
    pub(crate) settings: ResolutionSettings,
}

/// A frozen registry plus the scope storage its scoped bindings use
///
/// Building the container moves the registry behind an `Arc`; from then on it
/// is read-only and shared by every resolver the container hands out.
///
/// # Example
///
/// ```ignore
/// let mut registry = BindingRegistry::new();
/// registry.register(Binding::singleton(|_| Ok(Arc::new(Config::load()?))));
///
/// let container = Container::new(registry, Arc::new(InMemoryScopeStorage::new()));
/// let config: Arc<Config> = container.direct().instance(None)?;
/// ```
#[derive(Clone)]
pub struct Container {
    root: DirectResolver,
}

impl Container {
    /// Freeze `registry` with default settings
    pub fn new(registry: BindingRegistry, scopes: Arc<dyn ScopeStorage>) -> Self {
        Self::with_settings(registry, scopes, ResolutionSettings::default())
    }

    /// Freeze `registry` with explicit settings
    pub fn with_settings(
        registry: BindingRegistry,
        scopes: Arc<dyn ScopeStorage>,
        settings: ResolutionSettings,
    ) -> Self {
        debug!(
            bindings = registry.len(),
            policy = ?registry.policy(),
            max_depth = settings.max_depth,
            "Container created"
        );
        let state = Arc::new(ContainerState {
            registry,
            scopes,
            settings,
        });
        Self {
            root: DirectResolver::new(state, ResolutionContext::global()),
        }
    }

    /// Resolver over the global context with no receiver
    pub fn direct(&self) -> DirectResolver {
        self.root.clone()
    }

    /// Resolver bound to the selected context and receiver
    pub fn on(&self, context: ContextSelector, receiver: ReceiverSelector) -> DirectResolver {
        self.root.on(context, receiver)
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.root.state().registry
    }

    pub fn scopes(&self) -> &dyn ScopeStorage {
        self.root.state().scopes.as_ref()
    }

    pub fn settings(&self) -> &ResolutionSettings {
        &self.root.state().settings
    }

    /// Drop every contextual value cached for `context`
    pub fn release_context(&self, context: &ContextValue) {
        debug!(context = ?context, "Releasing context scope");
        self.scopes().release_context(context);
    }
}

impl ResolverAware for Container {
    fn resolver(&self) -> &DirectResolver {
        &self.root
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.registry().len())
            .field("cached", &self.scopes().len())
            .field("settings", self.settings())
            .finish()
    }
}
