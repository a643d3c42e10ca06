//! Application Layer - tydi
//!
//! The retrieval and construction core: bindings, the registry that holds
//! them, the loop guard protecting constructions, and the retrieval engine
//! that turns bindings into factories, providers and instances.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns the Binding Registry (populated once, frozen into a [`Container`])
//! - Threads a [`ResolutionContext`] through every retrieval
//! - Detects circular constructions through a per-thread construction stack
//! - Routes scoped constructions through the domain `ScopeStorage` port
//!
//! ## Modules
//!
//! - `binding`: construction recipes and their type-erased registry form
//! - `registry`: key to bindings mapping, lookup-one and lookup-all
//! - `context`: resolution context and inherit selectors
//! - `guard`: construction stack and loop detection
//! - `engine`: container, direct resolver, factories and providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tydi-domain`: keys, tags, context values, scope port, errors
//! - `tracing` for structured logging

pub mod binding;
pub mod context;
pub mod engine;
pub mod guard;
pub mod registry;

pub use binding::{Binding, ErasedBinding};
pub use context::{ContextSelector, ReceiverSelector, ResolutionContext};
pub use engine::{Container, DirectResolver, Factory, Provider, ResolutionSettings, ResolverAware};
pub use guard::{ConstructionToken, LoopGuard};
pub use registry::{BindingRegistry, LookupPolicy};
