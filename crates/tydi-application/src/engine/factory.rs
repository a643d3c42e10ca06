use std::fmt;
use std::sync::Arc;

use tracing::trace;
use tydi_domain::error::{Error, Result};
use tydi_domain::ports::{AnyValue, ScopeRequest};
use tydi_domain::value_objects::{BindingId, ScopePolicy, TypeKey};

use crate::binding::ConstructFn;
use crate::guard::LoopGuard;

use super::resolver::DirectResolver;

/// Deferred construction of a `T` from an `A`
///
/// Each [`invoke`](Self::invoke) is one loop-guarded construction. Whether it
/// yields a fresh value is decided by the binding's scope; the factory itself
/// caches nothing.
pub struct Factory<A, T> {
    resolver: DirectResolver,
    key: TypeKey,
    binding: BindingId,
    scope: ScopePolicy,
    construct: Arc<ConstructFn<A, T>>,
}

impl<A, T> Factory<A, T>
where
    A: 'static,
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(
        resolver: DirectResolver,
        key: TypeKey,
        binding: BindingId,
        scope: ScopePolicy,
        construct: Arc<ConstructFn<A, T>>,
    ) -> Self {
        Self {
            resolver,
            key,
            binding,
            scope,
            construct,
        }
    }

    /// Construct a value from `argument`
    pub fn invoke(&self, argument: A) -> Result<T> {
        let _token = LoopGuard::enter_with_limit(&self.key, self.resolver.max_depth())?;
        trace!(key = %self.key, binding = %self.binding, scope = %self.scope, "Constructing");

        if self.scope.is_cached() {
            self.invoke_scoped(argument)
        } else {
            (self.construct)(&self.resolver, argument)
        }
    }

    fn invoke_scoped(&self, argument: A) -> Result<T> {
        let request = ScopeRequest {
            policy: self.scope,
            key: &self.key,
            binding: self.binding,
            context: self.resolver.context().context(),
        };
        let mut argument = Some(argument);
        let value = self.resolver.scopes().get_or_compute(&request, &mut || -> Result<AnyValue> {
            let argument = argument.take().ok_or_else(|| {
                Error::construction(format!(
                    "Scope storage computed {} twice in one construction",
                    self.key
                ))
            })?;
            let value = (self.construct)(&self.resolver, argument)?;
            Ok(Arc::new(value) as AnyValue)
        })?;

        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::type_mismatch(self.key.clone()))
    }

    /// Adapt into a provider calling `argument` once per provider call
    pub fn to_provider<F>(self, argument: F) -> Provider<T>
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        let key = self.key.clone();
        Provider::new(key, move || self.invoke(argument()))
    }

    /// Adapt into a provider passing a clone of `argument` on every call
    pub fn to_provider_with_arg(self, argument: A) -> Provider<T>
    where
        A: Clone + Send + Sync,
    {
        self.to_provider(move || argument.clone())
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn binding(&self) -> BindingId {
        self.binding
    }

    pub fn scope(&self) -> ScopePolicy {
        self.scope
    }

    /// Resolver whose context this factory constructs in
    pub fn resolver(&self) -> &DirectResolver {
        &self.resolver
    }
}

impl<T> Factory<(), T>
where
    T: Clone + Send + Sync + 'static,
{
    /// View an argument-free factory as a provider
    pub fn into_provider(self) -> Provider<T> {
        self.to_provider(|| ())
    }
}

impl<A, T> Clone for Factory<A, T> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            key: self.key.clone(),
            binding: self.binding,
            scope: self.scope,
            construct: Arc::clone(&self.construct),
        }
    }
}

impl<A, T> fmt::Debug for Factory<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("key", &self.key)
            .field("binding", &self.binding)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Deferred, argument-free construction of a `T`
pub struct Provider<T> {
    key: TypeKey,
    get: Arc<dyn Fn() -> Result<T> + Send + Sync>,
}

impl<T> Provider<T> {
    pub(crate) fn new<F>(key: TypeKey, get: F) -> Self
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        Self {
            key,
            get: Arc::new(get),
        }
    }

    /// Construct a value
    pub fn get(&self) -> Result<T> {
        (self.get)()
    }

    /// Key of the binding behind this provider
    pub fn key(&self) -> &TypeKey {
        &self.key
    }
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            get: Arc::clone(&self.get),
        }
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
