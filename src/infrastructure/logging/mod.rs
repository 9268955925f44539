//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - json, pretty and compact formatting
//! - `RUST_LOG` overrides on top of the configured level
//! - Output on stderr so stdout stays free for runner commands

pub mod logger;

pub use logger::LoggerImpl;
