//! Bindings
//!
//! A [`Binding`] is the recipe for producing a `T` from an `A` and the
//! resolution context of the request. Once registered it becomes an
//! [`ErasedBinding`]: the key, scope and identifier stay inspectable, and the
//! typed construction function is recovered by downcasting with the same
//! `A`/`T` the key was built from.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tydi_domain::error::{Error, Result};
use tydi_domain::value_objects::{BindingId, ScopePolicy, Tag, TypeKey};

use crate::engine::DirectResolver;

/// Construction function of a binding
pub type ConstructFn<A, T> = dyn Fn(&DirectResolver, A) -> Result<T> + Send + Sync;

/// Recipe for producing a `T` given an `A`
///
/// Bound values are `Clone` so cached scopes can hand out the same instance
/// repeatedly; bind `Arc<Service>` for shared services.
///
/// # Example
///
/// ```ignore
/// registry.register(Binding::singleton(|_| Ok(Arc::new(Database::connect()))));
/// registry.register(
///     Binding::factory(|resolver, id: u64| {
///         Ok(User::load(resolver.instance::<Arc<Database>>(None)?, id))
///     })
///     .with_tag("users"),
/// );
/// ```
pub struct Binding<A, T> {
    tag: Option<Tag>,
    scope: ScopePolicy,
    construct: Arc<ConstructFn<A, T>>,
}

impl<A: 'static, T: Clone + Send + Sync + 'static> Binding<A, T> {
    /// A binding taking an argument; a new value on every invocation
    pub fn factory<F>(construct: F) -> Self
    where
        F: Fn(&DirectResolver, A) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            tag: None,
            scope: ScopePolicy::Transient,
            construct: Arc::new(construct),
        }
    }

    /// Set the tag distinguishing this binding from others of its signature
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    pub fn scope(&self) -> ScopePolicy {
        self.scope
    }

    /// Key this binding answers to
    pub fn key(&self) -> TypeKey {
        TypeKey::of::<A, T>(self.tag.clone())
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<(), T> {
    /// An argument-free binding; a new value on every invocation
    pub fn provider<F>(construct: F) -> Self
    where
        F: Fn(&DirectResolver) -> Result<T> + Send + Sync + 'static,
    {
        Self::scoped(ScopePolicy::Transient, construct)
    }

    /// An argument-free binding constructed once for the container's lifetime
    pub fn singleton<F>(construct: F) -> Self
    where
        F: Fn(&DirectResolver) -> Result<T> + Send + Sync + 'static,
    {
        Self::scoped(ScopePolicy::Singleton, construct)
    }

    /// An argument-free binding constructed once per resolution context
    pub fn contextual<F>(construct: F) -> Self
    where
        F: Fn(&DirectResolver) -> Result<T> + Send + Sync + 'static,
    {
        Self::scoped(ScopePolicy::Contextual, construct)
    }

    /// An argument-free binding under an explicit scope policy
    pub fn scoped<F>(scope: ScopePolicy, construct: F) -> Self
    where
        F: Fn(&DirectResolver) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            tag: None,
            scope,
            construct: Arc::new(move |resolver: &DirectResolver, ()| construct(resolver)),
        }
    }

    /// An argument-free binding always returning a clone of `value`
    pub fn instance(value: T) -> Self {
        Self::provider(move |_| Ok(value.clone()))
    }
}

impl<A, T> fmt::Debug for Binding<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("tag", &self.tag)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

struct Construct<A, T>(Arc<ConstructFn<A, T>>);

/// A registered binding with its `A`/`T` erased
#[derive(Clone)]
pub struct ErasedBinding {
    id: BindingId,
    key: TypeKey,
    scope: ScopePolicy,
    construct: Arc<dyn Any + Send + Sync>,
}

impl ErasedBinding {
    pub(crate) fn new<A: 'static, T: Clone + Send + Sync + 'static>(
        id: BindingId,
        binding: Binding<A, T>,
    ) -> Self {
        Self {
            id,
            key: binding.key(),
            scope: binding.scope,
            construct: Arc::new(Construct(binding.construct)),
        }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn scope(&self) -> ScopePolicy {
        self.scope
    }

    /// Recover the typed construction function
    pub(crate) fn construct<A: 'static, T: 'static>(&self) -> Result<Arc<ConstructFn<A, T>>> {
        self.construct
            .downcast_ref::<Construct<A, T>>()
            .map(|construct| Arc::clone(&construct.0))
            .ok_or_else(|| Error::type_mismatch(self.key.clone()))
    }
}

impl fmt::Debug for ErasedBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedBinding")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
