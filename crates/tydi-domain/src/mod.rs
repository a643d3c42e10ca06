//! # Domain Layer
//!
//! Core value types of the tydi resolution core. Everything here is pure data:
//! no registry, no scope storage, no logging.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type identities, tags, type keys, context values, scope policies |
//! | [`ports`] | Boundary contracts implemented by outer layers (scope storage) |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AnyValue, ScopeRequest, ScopeStorage};
pub use value_objects::{
    BindingId, ContextId, ContextValue, Receiver, ScopePolicy, Tag, TypeIdentity, TypeKey, TypeToken,
    WeakContextValue, generic,
};
