//! # Infrastructure Layer
//!
//! Technical concerns around the resolution core: the default scope storage,
//! layered configuration, structured logging and the composition root that
//! builds a [`Container`](tydi_application::Container) from them.
//!
//! ## Module Categories
//!
//! ### Scope Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`scope`] | DashMap-backed scope storage and a caching-free null storage |
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered configuration (defaults, TOML, environment) |
//! | [`bootstrap`] | Builds a container from configuration and a registry |
//! | [`constants`] | Infrastructure constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`utils`] | Timing helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod scope;
pub mod utils;

pub use bootstrap::{build_container, build_container_with_storage};
pub use config::{ConfigLoader, ContainerConfig, LoggingConfig, ResolutionConfig};
pub use error_ext::ErrorContext;
pub use scope::{InMemoryScopeStorage, NullScopeStorage};
pub use utils::TimedOperation;
