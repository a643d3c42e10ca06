//! Retrieval Engine
//!
//! Turns registry lookups into the retrieval shapes callers consume:
//!
//! ```text
//!                  required      optional            all
//!   Factory<A,T>   factory       factory_or_none     all_factories
//!   Provider<T>    provider      provider_or_none    all_providers
//!   Instance T     instance      instance_or_none    all_instances
//! ```
//!
//! plus argument-adapting provider/instance variants and `on(..)` for
//! context-scoped retrieval. All shapes live on [`DirectResolver`], the single
//! capability object bound to a resolution context; a [`Container`] hands out
//! resolvers over its frozen registry.
//!
//! ## Per-call state machine
//!
//! ```text
//! Requested ─► Lookup ─┬─ Found ─► Constructing ─┬─ Completed
//!                      │                         ├─ LoopDetected        (always surfaces)
//!                      │                         └─ ConstructionFailed  (propagated unchanged)
//!                      └─ NotFound ─┬─ required ─► Error::NotFound
//!                                   └─ optional ─► None / empty
//! ```

mod container;
mod factory;
mod resolver;

pub use container::{Container, ResolutionSettings};
pub use factory::{Factory, Provider};
pub use resolver::{DirectResolver, ResolverAware};
