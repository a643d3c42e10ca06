use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::constants::GLOBAL_CONTEXT_LABEL;

type Shared = Arc<dyn Any + Send + Sync>;

/// Identity of a context value, stable for as long as the value is alive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(usize);

impl ContextId {
    /// Identity of the global context
    pub const GLOBAL: Self = Self(0);
}

fn address_of(value: &Shared) -> usize {
    Arc::as_ptr(value).cast::<()>() as usize
}

/// Scoping value of a resolution context
///
/// Compared by identity: two values are equal when they share the same
/// allocation. `ContextValue::global()` is the context used when a caller does
/// not supply one.
#[derive(Clone)]
pub struct ContextValue {
    value: Option<Shared>,
    type_name: &'static str,
}

impl ContextValue {
    /// The default, global context
    pub fn global() -> Self {
        Self {
            value: None,
            type_name: GLOBAL_CONTEXT_LABEL,
        }
    }

    /// Wrap a value as a new context
    pub fn new<C: Any + Send + Sync>(value: C) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Use an already shared value as context, keeping its identity
    pub fn from_arc<C: Any + Send + Sync>(value: Arc<C>) -> Self {
        Self {
            value: Some(value),
            type_name: std::any::type_name::<C>(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.value.is_none()
    }

    pub fn id(&self) -> ContextId {
        self.value
            .as_ref()
            .map_or(ContextId::GLOBAL, |value| ContextId(address_of(value)))
    }

    /// Borrow the context as `C`, if that is its type
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        self.value.as_deref().and_then(|value| value.downcast_ref::<C>())
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Non-owning handle to this context
    pub fn downgrade(&self) -> WeakContextValue {
        WeakContextValue {
            value: self.value.as_ref().map(Arc::downgrade),
            id: self.id(),
        }
    }
}

impl Default for ContextValue {
    fn default() -> Self {
        Self::global()
    }
}

impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ContextValue {}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            f.write_str("ContextValue(global)")
        } else {
            write!(f, "ContextValue({}@{:#x})", self.type_name, self.id().0)
        }
    }
}

/// Weak reference to a [`ContextValue`]
///
/// Does not keep the context value alive, but holds its allocation, so the
/// [`ContextId`] is not handed to another context while the handle exists.
#[derive(Clone)]
pub struct WeakContextValue {
    value: Option<Weak<dyn Any + Send + Sync>>,
    id: ContextId,
}

impl WeakContextValue {
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Whether the context is still referenced; the global context always is
    pub fn is_alive(&self) -> bool {
        self.value
            .as_ref()
            .is_none_or(|value| value.strong_count() > 0)
    }
}

impl fmt::Debug for WeakContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakContextValue")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Identity of the party on whose behalf a resolution happens
///
/// Bindings can inspect the receiver to produce receiver-specific values
/// (a logger named after the requesting component, for instance).
#[derive(Clone)]
pub struct Receiver {
    value: Shared,
    type_name: &'static str,
}

impl Receiver {
    pub fn new<R: Any + Send + Sync>(value: R) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<R: Any + Send + Sync>(value: Arc<R>) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<R>(),
        }
    }

    /// Borrow the receiver as `R`, if that is its type
    pub fn downcast_ref<R: Any>(&self) -> Option<&R> {
        self.value.downcast_ref::<R>()
    }

    /// Type name of the receiver, usable as a diagnostic label
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for Receiver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl Eq for Receiver {}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receiver({})", self.type_name)
    }
}
