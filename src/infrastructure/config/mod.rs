//! Configuration management infrastructure
//!
//! Hierarchical runtime settings using figment:
//! - Programmatic defaults
//! - Optional YAML file
//! - Environment variable overrides
//! - Validation after extraction

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
