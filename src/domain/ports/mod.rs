//! Port trait definitions (Hexagonal Architecture)
//!
//! - ProjectClient: GitHub Projects lookups and mutations
//!
//! These traits define the contracts that keep the pipeline independent of
//! the GraphQL transport.

pub mod project_client;

pub use project_client::ProjectClient;
