use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use tydi_domain::error::{Error, Result};
use tydi_domain::ports::ScopeStorage;
use tydi_domain::value_objects::{ContextValue, Receiver, Tag, TypeKey};

use crate::binding::ErasedBinding;
use crate::context::{ContextSelector, ReceiverSelector, ResolutionContext};

use super::container::ContainerState;
use super::factory::{Factory, Provider};

/// Anything that can hand out a [`DirectResolver`]
///
/// Components that keep a resolver around implement this so helpers can take
/// `&impl ResolverAware` instead of a concrete container type.
pub trait ResolverAware {
    fn resolver(&self) -> &DirectResolver;
}

/// The retrieval capability bound to one resolution context
///
/// Cheap to clone. Construction functions receive the resolver of the
/// retrieval that triggered them, so nested retrievals inherit its context
/// and receiver unless they switch with [`on`](Self::on).
///
/// Every method takes the tag of the binding to look up; pass `None` for
/// untagged bindings.
#[derive(Clone)]
pub struct DirectResolver {
    state: Arc<ContainerState>,
    context: ResolutionContext,
}

impl DirectResolver {
    pub(crate) fn new(state: Arc<ContainerState>, context: ResolutionContext) -> Self {
        Self { state, context }
    }

    pub(crate) fn state(&self) -> &ContainerState {
        &self.state
    }

    pub(crate) fn scopes(&self) -> &dyn ScopeStorage {
        self.state.scopes.as_ref()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.state.settings.max_depth
    }

    /// Resolution context of this resolver
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Receiver of this resolver, if any
    pub fn receiver(&self) -> Option<&Receiver> {
        self.context.receiver()
    }

    // ------------------------------------------------------------------
    // Context-scoped retrieval
    // ------------------------------------------------------------------

    /// Resolver bound to the selected context and receiver
    ///
    /// `Inherit` keeps the value of this resolver, so a caller can override
    /// just one of the two.
    pub fn on(&self, context: ContextSelector, receiver: ReceiverSelector) -> Self {
        Self {
            state: Arc::clone(&self.state),
            context: self.context.select(context, receiver),
        }
    }

    /// Resolver bound to `context`, keeping the receiver
    pub fn on_context(&self, context: ContextValue) -> Self {
        self.on(ContextSelector::Set(context), ReceiverSelector::Inherit)
    }

    /// Resolver bound to `receiver`, keeping the context
    pub fn on_receiver(&self, receiver: Receiver) -> Self {
        self.on(ContextSelector::Inherit, ReceiverSelector::Set(Some(receiver)))
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    /// Factory of `T` taking an `A`
    pub fn factory<A, T>(&self, tag: Option<Tag>) -> Result<Factory<A, T>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        let key = TypeKey::of::<A, T>(tag);
        match self.state.registry.lookup_one(&key) {
            Some(binding) => self.bind(binding),
            None => Err(self.not_found(key)),
        }
    }

    /// Factory of `T` taking an `A`, or `None` when nothing is bound
    pub fn factory_or_none<A, T>(&self, tag: Option<Tag>) -> Result<Option<Factory<A, T>>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        let key = TypeKey::of::<A, T>(tag);
        self.state
            .registry
            .lookup_one(&key)
            .map(|binding| self.bind(binding))
            .transpose()
    }

    /// One factory per binding of the key, in registration order
    pub fn all_factories<A, T>(&self, tag: Option<Tag>) -> Result<Vec<Factory<A, T>>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        let key = TypeKey::of::<A, T>(tag);
        let bindings = self.state.registry.lookup_all(&key);
        trace!(key = %key, count = bindings.len(), "Retrieving all factories");
        bindings.iter().map(|binding| self.bind(binding)).collect()
    }

    // ------------------------------------------------------------------
    // Providers
    // ------------------------------------------------------------------

    /// Provider of `T`
    pub fn provider<T>(&self, tag: Option<Tag>) -> Result<Provider<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(self.factory::<(), T>(tag)?.into_provider())
    }

    /// Provider of `T`, or `None` when nothing is bound
    pub fn provider_or_none<T>(&self, tag: Option<Tag>) -> Result<Option<Provider<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(self.factory_or_none::<(), T>(tag)?.map(Factory::into_provider))
    }

    /// One provider per binding of the key, in registration order
    pub fn all_providers<T>(&self, tag: Option<Tag>) -> Result<Vec<Provider<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(self
            .all_factories::<(), T>(tag)?
            .into_iter()
            .map(Factory::into_provider)
            .collect())
    }

    /// Provider over an `A`-taking factory, passing `argument` on every call
    pub fn provider_with_arg<A, T>(&self, tag: Option<Tag>, argument: A) -> Result<Provider<T>>
    where
        A: Clone + Send + Sync + 'static,
        T: Clone + Send + Sync + 'static,
    {
        Ok(self.factory::<A, T>(tag)?.to_provider_with_arg(argument))
    }

    /// Optional form of [`provider_with_arg`](Self::provider_with_arg)
    pub fn provider_or_none_with_arg<A, T>(
        &self,
        tag: Option<Tag>,
        argument: A,
    ) -> Result<Option<Provider<T>>>
    where
        A: Clone + Send + Sync + 'static,
        T: Clone + Send + Sync + 'static,
    {
        Ok(self
            .factory_or_none::<A, T>(tag)?
            .map(|factory| factory.to_provider_with_arg(argument)))
    }

    /// One argument-closing provider per binding of the key
    pub fn all_providers_with_arg<A, T>(
        &self,
        tag: Option<Tag>,
        argument: A,
    ) -> Result<Vec<Provider<T>>>
    where
        A: Clone + Send + Sync + 'static,
        T: Clone + Send + Sync + 'static,
    {
        Ok(self
            .all_factories::<A, T>(tag)?
            .into_iter()
            .map(|factory| factory.to_provider_with_arg(argument.clone()))
            .collect())
    }

    /// Provider over an `A`-taking factory, calling `argument` on every call
    pub fn provider_with<A, T, F>(&self, tag: Option<Tag>, argument: F) -> Result<Provider<T>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        Ok(self.factory::<A, T>(tag)?.to_provider(argument))
    }

    /// Optional form of [`provider_with`](Self::provider_with)
    pub fn provider_or_none_with<A, T, F>(
        &self,
        tag: Option<Tag>,
        argument: F,
    ) -> Result<Option<Provider<T>>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        Ok(self
            .factory_or_none::<A, T>(tag)?
            .map(|factory| factory.to_provider(argument)))
    }

    /// One provider per binding of the key, all sharing `argument`
    pub fn all_providers_with<A, T, F>(&self, tag: Option<Tag>, argument: F) -> Result<Vec<Provider<T>>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        let argument = Arc::new(argument);
        Ok(self
            .all_factories::<A, T>(tag)?
            .into_iter()
            .map(|factory| {
                let argument = Arc::clone(&argument);
                factory.to_provider(move || argument())
            })
            .collect())
    }

    // ------------------------------------------------------------------
    // Instances
    // ------------------------------------------------------------------

    /// Instance of `T`, constructed now
    pub fn instance<T>(&self, tag: Option<Tag>) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.factory::<(), T>(tag)?.invoke(())
    }

    /// Instance of `T`, or `None` when nothing is bound
    ///
    /// Loop and construction failures are still returned as errors.
    pub fn instance_or_none<T>(&self, tag: Option<Tag>) -> Result<Option<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.factory_or_none::<(), T>(tag)?
            .map(|factory| factory.invoke(()))
            .transpose()
    }

    /// One instance per binding of the key, constructed in registration order
    pub fn all_instances<T>(&self, tag: Option<Tag>) -> Result<Vec<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.all_factories::<(), T>(tag)?
            .iter()
            .map(|factory| factory.invoke(()))
            .collect()
    }

    /// Instance of `T` from an `A`-taking factory
    pub fn instance_with_arg<A, T>(&self, tag: Option<Tag>, argument: A) -> Result<T>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        self.factory::<A, T>(tag)?.invoke(argument)
    }

    /// Optional form of [`instance_with_arg`](Self::instance_with_arg)
    pub fn instance_or_none_with_arg<A, T>(&self, tag: Option<Tag>, argument: A) -> Result<Option<T>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        self.factory_or_none::<A, T>(tag)?
            .map(|factory| factory.invoke(argument))
            .transpose()
    }

    /// One instance per binding of the key, each given a clone of `argument`
    pub fn all_instances_with_arg<A, T>(&self, tag: Option<Tag>, argument: A) -> Result<Vec<T>>
    where
        A: Clone + 'static,
        T: Clone + Send + Sync + 'static,
    {
        self.all_factories::<A, T>(tag)?
            .iter()
            .map(|factory| factory.invoke(argument.clone()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn bind<A, T>(&self, binding: &ErasedBinding) -> Result<Factory<A, T>>
    where
        A: 'static,
        T: Clone + Send + Sync + 'static,
    {
        Ok(Factory::new(
            self.clone(),
            binding.key().clone(),
            binding.id(),
            binding.scope(),
            binding.construct::<A, T>()?,
        ))
    }

    fn not_found(&self, key: TypeKey) -> Error {
        let candidates: Vec<TypeKey> = self
            .state
            .registry
            .candidates_for(key.return_type())
            .into_iter()
            .filter(|candidate| candidate != &key)
            .collect();
        debug!(key = %key, candidates = candidates.len(), "No binding found");
        Error::not_found_with_candidates(key, candidates)
    }
}

impl ResolverAware for DirectResolver {
    fn resolver(&self) -> &DirectResolver {
        self
    }
}

impl fmt::Debug for DirectResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectResolver")
            .field("context", &self.context)
            .field("bindings", &self.state.registry.len())
            .finish()
    }
}
