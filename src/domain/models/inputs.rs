//! Validated action inputs.

use std::fmt;

use super::label_filter::LabelFilter;
use crate::domain::errors::{DomainError, DomainResult};

/// Input names as declared by the action.
pub mod names {
    pub const PROJECT_URL: &str = "project-url";
    pub const GITHUB_TOKEN: &str = "github-token";
    pub const LABELED: &str = "labeled";
    pub const LABEL_OPERATOR: &str = "label-operator";
    pub const LABEL_MAP: &str = "label-map";
}

/// Inputs as received, before validation. Unset and empty are equivalent.
#[derive(Clone, Default)]
pub struct RawInputs {
    pub project_url: Option<String>,
    pub github_token: Option<String>,
    pub labeled: Option<String>,
    pub label_operator: Option<String>,
    pub label_map: Option<String>,
}

/// Inputs after validation and normalisation.
#[derive(Clone)]
pub struct ActionInputs {
    pub project_url: String,
    pub github_token: String,
    pub label_filter: LabelFilter,
    /// Raw `label-map` JSON; parsed lazily so a bad map never fails the run.
    pub label_map: Option<String>,
}

impl ActionInputs {
    /// Validate raw inputs.
    ///
    /// Values are trimmed. A missing or blank `project-url` or
    /// `github-token` is a [`DomainError::MissingInput`].
    pub fn from_raw(raw: RawInputs) -> DomainResult<Self> {
        let project_url = required(raw.project_url, names::PROJECT_URL)?;
        let github_token = required(raw.github_token, names::GITHUB_TOKEN)?;
        let label_filter = LabelFilter::from_inputs(
            raw.labeled.as_deref().unwrap_or_default(),
            raw.label_operator.as_deref().unwrap_or_default(),
        );

        Ok(Self {
            project_url,
            github_token,
            label_filter,
            label_map: optional(raw.label_map),
        })
    }
}

impl fmt::Debug for RawInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputs")
            .field("project_url", &self.project_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("labeled", &self.labeled)
            .field("label_operator", &self.label_operator)
            .field("label_map", &self.label_map)
            .finish()
    }
}

impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("project_url", &self.project_url)
            .field("github_token", &"[REDACTED]")
            .field("label_filter", &self.label_filter)
            .field("label_map", &self.label_map)
            .finish()
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &str) -> DomainResult<String> {
    optional(value).ok_or_else(|| DomainError::MissingInput(name.to_string()))
}
