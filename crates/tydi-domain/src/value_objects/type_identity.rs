use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Runtime identity of a Rust type
///
/// Equality and hashing use [`TypeId`] only, so the full generic structure of
/// the type takes part in comparisons: `Vec<u8>` and `Vec<u16>` are different
/// identities. The type name is kept for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Whether this identity denotes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Whether this identity denotes the unit type
    pub fn is_unit(&self) -> bool {
        self.is::<()>()
    }

    /// Underlying [`TypeId`]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdentity({})", self.name)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Typed handle for a type identity
///
/// Callers build one at the retrieval call site and pass it (or its
/// [`identity`](Self::identity)) to key construction.
pub struct TypeToken<T: ?Sized> {
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized + 'static> TypeToken<T> {
    /// Create the token for `T`
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Identity described by this token
    pub fn identity(&self) -> TypeIdentity {
        TypeIdentity::of::<T>()
    }
}

impl<T: ?Sized + 'static> Default for TypeToken<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeToken<T> {}

impl<T: ?Sized + 'static> fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken<{}>", std::any::type_name::<T>())
    }
}

impl<T: ?Sized + 'static> From<TypeToken<T>> for TypeIdentity {
    fn from(token: TypeToken<T>) -> Self {
        token.identity()
    }
}

/// Shorthand for `TypeToken::<T>::new()`
pub fn generic<T: ?Sized + 'static>() -> TypeToken<T> {
    TypeToken::new()
}
