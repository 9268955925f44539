//! Project client port.
//!
//! The pipeline talks to the project board exclusively through this trait.
//! Every call is awaited before the next one is issued because each one
//! needs an identifier produced by the previous call.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ProjectReference, RemoteProjectField};

/// Remote operations on a project board.
///
/// Implementations report every failure as
/// [`DomainError::RemoteCallFailure`](crate::domain::errors::DomainError::RemoteCallFailure).
#[async_trait]
pub trait ProjectClient: Send + Sync {
    /// Resolve the project's node id from its owner and number.
    async fn resolve_project_id(&self, project: &ProjectReference) -> DomainResult<String>;

    /// List the project's single-select custom fields.
    async fn get_custom_fields(&self, project_id: &str) -> DomainResult<Vec<RemoteProjectField>>;

    /// Add an existing issue or pull request to the project.
    ///
    /// Not idempotent: attaching the same content twice yields two calls
    /// and the caller cannot tell whether the item already existed.
    async fn attach_item(&self, project_id: &str, content_id: &str) -> DomainResult<String>;

    /// Set a single-select field on a project item.
    async fn set_single_select_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> DomainResult<()>;

    /// Create a draft issue in the project and return its item id.
    async fn create_draft_issue(&self, project_id: &str, title: &str) -> DomainResult<String>;
}
