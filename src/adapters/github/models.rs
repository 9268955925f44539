//! GitHub GraphQL request and response models.
//!
//! These structs map to the Projects (v2) GraphQL payloads used by the
//! client. Every nested object is optional so partial responses deserialize
//! and the client decides what is missing.

use serde::{Deserialize, Serialize};

use crate::domain::models::{FieldOption, RemoteProjectField};

/// GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// `data` of the project node id query. Only the queried owner is present.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectNodeIdData {
    pub organization: Option<ProjectOwner>,
    pub user: Option<ProjectOwner>,
}

/// An organization or user holding a project.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOwner {
    pub project_v2: Option<NodeId>,
}

/// Any object selected only for its `id`.
#[derive(Debug, Deserialize)]
pub struct NodeId {
    pub id: String,
}

/// `data` of the custom field query.
#[derive(Debug, Deserialize)]
pub struct ProjectFieldsData {
    pub node: Option<ProjectFieldsNode>,
}

/// The project node with its field connection.
#[derive(Debug, Deserialize)]
pub struct ProjectFieldsNode {
    pub fields: Option<FieldConnection>,
}

/// Connection of project fields.
#[derive(Debug, Deserialize)]
pub struct FieldConnection {
    #[serde(default)]
    pub nodes: Vec<Option<FieldNode>>,
}

/// A project field. Fields that are not single-select come back as `{}`.
#[derive(Debug, Deserialize)]
pub struct FieldNode {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<FieldOptionNode>,
}

/// A single-select option.
#[derive(Debug, Deserialize)]
pub struct FieldOptionNode {
    pub id: String,
    pub name: String,
}

impl FieldNode {
    /// Convert into a domain field, dropping nodes without id or name.
    pub fn into_remote_field(self) -> Option<RemoteProjectField> {
        Some(RemoteProjectField {
            id: self.id?,
            name: self.name?,
            options: self
                .options
                .into_iter()
                .map(|o| FieldOption {
                    id: o.id,
                    name: o.name,
                })
                .collect(),
        })
    }
}

/// `data` of the `addProjectV2ItemById` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemData {
    pub add_project_v2_item_by_id: AddItemPayload,
}

/// Payload of `addProjectV2ItemById`.
#[derive(Debug, Deserialize)]
pub struct AddItemPayload {
    pub item: NodeId,
}

/// `data` of the `updateProjectV2ItemFieldValue` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldData {
    pub update_project_v2_item_field_value: UpdateFieldPayload,
}

/// Payload of `updateProjectV2ItemFieldValue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldPayload {
    pub project_v2_item: Option<NodeId>,
}

/// `data` of the `addProjectV2DraftIssue` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDraftIssueData {
    pub add_project_v2_draft_issue: AddDraftIssuePayload,
}

/// Payload of `addProjectV2DraftIssue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDraftIssuePayload {
    pub project_item: NodeId,
}
