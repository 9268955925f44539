//! Common test utilities for integration tests
//!
//! Provides a recording in-memory `ProjectClient` and fixtures shared by
//! the pipeline and CLI tests.

#![allow(dead_code)]

use std::sync::Mutex;

use add_to_project::domain::models::{FieldOption, RemoteProjectField};
use add_to_project::{
    ActionInputs, DomainError, DomainResult, Item, ProjectClient, ProjectReference, RawInputs,
};
use async_trait::async_trait;

pub const PROJECT_URL: &str = "https://github.com/orgs/my-org/projects/7";
pub const PROJECT_ID: &str = "PVT_project7";

/// A call received by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ResolveProjectId(ProjectReference),
    GetCustomFields(String),
    AttachItem {
        project_id: String,
        content_id: String,
    },
    SetField {
        project_id: String,
        item_id: String,
        field_id: String,
        option_id: String,
    },
    CreateDraftIssue {
        project_id: String,
        title: String,
    },
}

/// In-memory project client returning canned responses.
pub struct RecordingClient {
    pub fields: Vec<RemoteProjectField>,
    pub fail_on: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
    next_item: Mutex<u32>,
}

impl RecordingClient {
    pub fn new(fields: Vec<RemoteProjectField>) -> Self {
        Self {
            fields,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
            next_item: Mutex::new(0),
        }
    }

    /// Fail the named operation with a remote error.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: Call) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(operation) {
            return Err(DomainError::RemoteCallFailure(format!("{operation} exploded")));
        }
        Ok(())
    }

    fn new_item_id(&self) -> String {
        let mut next = self.next_item.lock().unwrap();
        *next += 1;
        format!("PVTI_{next}")
    }
}

#[async_trait]
impl ProjectClient for RecordingClient {
    async fn resolve_project_id(&self, project: &ProjectReference) -> DomainResult<String> {
        self.record("resolve_project_id", Call::ResolveProjectId(project.clone()))?;
        Ok(PROJECT_ID.to_string())
    }

    async fn get_custom_fields(&self, project_id: &str) -> DomainResult<Vec<RemoteProjectField>> {
        self.record("get_custom_fields", Call::GetCustomFields(project_id.to_string()))?;
        Ok(self.fields.clone())
    }

    async fn attach_item(&self, project_id: &str, content_id: &str) -> DomainResult<String> {
        self.record(
            "attach_item",
            Call::AttachItem {
                project_id: project_id.to_string(),
                content_id: content_id.to_string(),
            },
        )?;
        Ok(self.new_item_id())
    }

    async fn set_single_select_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> DomainResult<()> {
        self.record(
            "set_single_select_field",
            Call::SetField {
                project_id: project_id.to_string(),
                item_id: item_id.to_string(),
                field_id: field_id.to_string(),
                option_id: option_id.to_string(),
            },
        )
    }

    async fn create_draft_issue(&self, project_id: &str, title: &str) -> DomainResult<String> {
        self.record(
            "create_draft_issue",
            Call::CreateDraftIssue {
                project_id: project_id.to_string(),
                title: title.to_string(),
            },
        )?;
        Ok(self.new_item_id())
    }
}

/// A "Priority" single-select field with High/Low options.
pub fn priority_field() -> RemoteProjectField {
    RemoteProjectField {
        id: "PVTSSF_priority".to_string(),
        name: "Priority".to_string(),
        options: vec![
            FieldOption {
                id: "opt_high".to_string(),
                name: "High".to_string(),
            },
            FieldOption {
                id: "opt_low".to_string(),
                name: "Low".to_string(),
            },
        ],
    }
}

/// Inputs for [`PROJECT_URL`] with the given filter and label map.
pub fn inputs(labeled: &str, operator: &str, label_map: Option<&str>) -> ActionInputs {
    ActionInputs::from_raw(RawInputs {
        project_url: Some(PROJECT_URL.to_string()),
        github_token: Some("ghp_test".to_string()),
        labeled: Some(labeled.to_string()),
        label_operator: Some(operator.to_string()),
        label_map: label_map.map(str::to_string),
    })
    .expect("test inputs are valid")
}

/// An issue in a repository owned by `owner`.
pub fn issue(owner: &str, labels: &[&str]) -> Item {
    Item::new(
        Some("I_kwDOissue".to_string()),
        Some(owner.to_string()),
        labels.iter().copied(),
        Some(format!("https://github.com/{owner}/repo/issues/42")),
    )
    .with_number(42)
}
