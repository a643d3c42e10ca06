//! Domain Value Objects
//!
//! Immutable values that make up a resolution request. They are compared by
//! their attributes (or, for opaque context values, by identity) and carry no
//! behavior beyond construction and comparison.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeIdentity`] | Runtime identity of a Rust type, including generic parameters |
//! | [`TypeToken`] | Typed handle producing a [`TypeIdentity`] at a call site |
//! | [`Tag`] | Opaque comparable discriminator between same-typed bindings |
//! | [`TypeKey`] | `(return type, argument type, tag)` lookup key |
//! | [`ContextValue`] | Scoping value of a resolution context |
//! | [`Receiver`] | Party on whose behalf a resolution happens |
//! | [`ScopePolicy`] | Instance reuse policy of a binding |

/// Opaque context and receiver values
pub mod context;
/// Scope policy and binding identifiers
pub mod scope;
/// Tags distinguishing bindings of the same signature
pub mod tag;
/// Type identities and tokens
pub mod type_identity;
/// Lookup keys
pub mod type_key;

pub use context::{ContextId, ContextValue, Receiver, WeakContextValue};
pub use scope::{BindingId, ScopePolicy};
pub use tag::Tag;
pub use type_identity::{TypeIdentity, TypeToken, generic};
pub use type_key::TypeKey;
