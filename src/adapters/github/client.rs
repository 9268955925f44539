//! GitHub GraphQL client for Projects (v2).
//!
//! Implements [`ProjectClient`] with one GraphQL POST per operation. HTTP,
//! transport and GraphQL-level errors all map to
//! [`DomainError::RemoteCallFailure`]. Nothing is retried.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Config, OwnerType, ProjectReference, RemoteProjectField};
use crate::domain::ports::ProjectClient;

use super::models::{
    AddDraftIssueData, AddItemData, FieldNode, GraphQLRequest, GraphQLResponse,
    ProjectFieldsData, ProjectNodeIdData, UpdateFieldData,
};

/// Number of project fields requested when looking up custom fields.
const FIELDS_PAGE_SIZE: u32 = 20;

const ORGANIZATION_PROJECT_QUERY: &str = r"
    query getProject($projectOwnerName: String!, $projectNumber: Int!) {
        organization(login: $projectOwnerName) {
            projectV2(number: $projectNumber) {
                id
            }
        }
    }
";

const USER_PROJECT_QUERY: &str = r"
    query getProject($projectOwnerName: String!, $projectNumber: Int!) {
        user(login: $projectOwnerName) {
            projectV2(number: $projectNumber) {
                id
            }
        }
    }
";

const CUSTOM_FIELDS_QUERY: &str = r"
    query getCustomField($projectId: ID!, $first: Int!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                fields(first: $first) {
                    nodes {
                        ... on ProjectV2SingleSelectField {
                            id
                            name
                            options {
                                id
                                name
                            }
                        }
                    }
                }
            }
        }
    }
";

const ADD_ITEM_MUTATION: &str = r"
    mutation addIssueToProject($input: AddProjectV2ItemByIdInput!) {
        addProjectV2ItemById(input: $input) {
            item {
                id
            }
        }
    }
";

const SET_FIELD_MUTATION: &str = r"
    mutation setSingleSelectField(
        $projectId: ID!
        $itemId: ID!
        $fieldId: ID!
        $optionId: String!
    ) {
        updateProjectV2ItemFieldValue(input: {
            projectId: $projectId
            itemId: $itemId
            fieldId: $fieldId
            value: { singleSelectOptionId: $optionId }
        }) {
            projectV2Item {
                id
            }
        }
    }
";

const ADD_DRAFT_ISSUE_MUTATION: &str = r"
    mutation addDraftIssueToProject($projectId: ID!, $title: String!) {
        addProjectV2DraftIssue(input: {
            projectId: $projectId,
            title: $title
        }) {
            projectItem {
                id
            }
        }
    }
";

/// HTTP client for the GitHub GraphQL API.
#[derive(Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client, with auth headers preset.
    http: Client,
    /// Full GraphQL endpoint, e.g. `https://api.github.com/graphql`.
    graphql_url: String,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("graphql_url", &self.graphql_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client against `api.github.com` with default settings.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, &Config::default())
    }

    /// Create a client from runtime settings.
    ///
    /// Requests go to [`Config::graphql_endpoint`].
    pub fn with_config(token: &str, config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("Invalid GitHub token")?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            graphql_url: config.graphql_endpoint(),
        })
    }

    /// GraphQL endpoint this client posts to.
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Execute a GraphQL query or mutation and return its `data`.
    async fn execute<V: Serialize, R: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> DomainResult<R> {
        let request = GraphQLRequest { query, variables };

        let resp = self
            .http
            .post(&self.graphql_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::RemoteCallFailure(format!("GitHub {operation} request failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::RemoteCallFailure(format!(
                "GitHub {operation} returned {status}: {body}"
            )));
        }

        let gql: GraphQLResponse<R> = resp.json().await.map_err(|e| {
            DomainError::RemoteCallFailure(format!("GitHub {operation} parse failed: {e}"))
        })?;

        if let Some(errors) = gql.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<_> = errors.iter().map(|e| format!(" - {}", e.message)).collect();
            return Err(DomainError::RemoteCallFailure(format!(
                "Request failed due to following response errors:\n{}",
                messages.join("\n")
            )));
        }

        gql.data.ok_or_else(|| {
            DomainError::RemoteCallFailure(format!("GitHub {operation} returned no data"))
        })
    }
}

#[async_trait]
impl ProjectClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %project.owner_name, number = project.project_number))]
    async fn resolve_project_id(&self, project: &ProjectReference) -> DomainResult<String> {
        let query = match project.owner_type {
            OwnerType::Organization => ORGANIZATION_PROJECT_QUERY,
            OwnerType::User => USER_PROJECT_QUERY,
        };
        let variables = json!({
            "projectOwnerName": project.owner_name,
            "projectNumber": project.project_number,
        });

        let data: ProjectNodeIdData = self.execute("getProject", query, variables).await?;
        let owner = match project.owner_type {
            OwnerType::Organization => data.organization,
            OwnerType::User => data.user,
        };

        owner
            .and_then(|o| o.project_v2)
            .map(|p| p.id)
            .ok_or_else(|| {
                DomainError::RemoteCallFailure(format!(
                    "Project {} not found for {} '{}'",
                    project.project_number, project.owner_type, project.owner_name
                ))
            })
    }

    #[instrument(skip(self))]
    async fn get_custom_fields(&self, project_id: &str) -> DomainResult<Vec<RemoteProjectField>> {
        let variables = json!({ "projectId": project_id, "first": FIELDS_PAGE_SIZE });
        let data: ProjectFieldsData = self
            .execute("getCustomField", CUSTOM_FIELDS_QUERY, variables)
            .await?;

        let fields: Vec<RemoteProjectField> = data
            .node
            .and_then(|n| n.fields)
            .map(|c| c.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(FieldNode::into_remote_field)
            .collect();

        debug!(count = fields.len(), "Fetched single-select fields");
        Ok(fields)
    }

    #[instrument(skip(self))]
    async fn attach_item(&self, project_id: &str, content_id: &str) -> DomainResult<String> {
        let variables = json!({
            "input": { "projectId": project_id, "contentId": content_id }
        });
        let data: AddItemData = self
            .execute("addProjectV2ItemById", ADD_ITEM_MUTATION, variables)
            .await?;
        Ok(data.add_project_v2_item_by_id.item.id)
    }

    #[instrument(skip(self))]
    async fn set_single_select_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> DomainResult<()> {
        let variables = json!({
            "projectId": project_id,
            "itemId": item_id,
            "fieldId": field_id,
            "optionId": option_id,
        });
        let data: UpdateFieldData = self
            .execute("updateProjectV2ItemFieldValue", SET_FIELD_MUTATION, variables)
            .await?;
        debug!(
            updated = ?data.update_project_v2_item_field_value.project_v2_item.map(|i| i.id),
            "Set field value"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_draft_issue(&self, project_id: &str, title: &str) -> DomainResult<String> {
        let variables = json!({ "projectId": project_id, "title": title });
        let data: AddDraftIssueData = self
            .execute("addProjectV2DraftIssue", ADD_DRAFT_ISSUE_MUTATION, variables)
            .await?;
        Ok(data.add_project_v2_draft_issue.project_item.id)
    }
}
