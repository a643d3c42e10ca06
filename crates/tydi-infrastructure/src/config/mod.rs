//! Configuration
//!
//! Layered container configuration: defaults, then an optional TOML file, then
//! `TYDI_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ContainerConfig, LoggingConfig, ResolutionConfig};
