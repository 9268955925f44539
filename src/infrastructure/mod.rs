//! Infrastructure layer module
//!
//! This module contains the integrations around the pipeline:
//! - Configuration management
//! - Logging infrastructure
//! - GitHub Actions runner I/O (event payload, step outputs)

pub mod config;
pub mod logging;
pub mod runner;
