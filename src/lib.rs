//! add-to-project - add issues and pull requests to GitHub project boards
//!
//! A single-invocation GitHub Action step. For the triggering issue or pull
//! request it:
//!
//! 1. checks the item's labels against the `labeled` / `label-operator` filter,
//! 2. resolves an optional single-select field value from the `label-map`,
//! 3. adds the item to the project (or a draft issue when the owners differ),
//! 4. sets the resolved field on the new project item.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): label filter, label map, project URL parsing,
//!   and the `ProjectClient` port
//! - **Application Layer** (`application`): the pipeline itself
//! - **Adapters** (`adapters`): GitHub GraphQL implementation of the port
//! - **Infrastructure Layer** (`infrastructure`): config, logging, runner I/O
//! - **CLI Layer** (`cli`): argument parsing and wiring
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use add_to_project::{AddToProject, GitHubClient};
//!
//! let client = GitHubClient::new(&token)?;
//! let outcome = AddToProject::new(Arc::new(client)).run(&inputs, &item).await?;
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::github::GitHubClient;
pub use application::AddToProject;
pub use domain::models::{
    ActionInputs, Config, FieldResolution, Item, LabelFilter, LabelOperator, OwnerType,
    ProjectReference, RawInputs, RemoteProjectField, RunOutcome,
};
pub use domain::ports::ProjectClient;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
