//! The add-to-project pipeline.
//!
//! Filters the triggering item by label, resolves the optional custom field
//! from the label map, and adds the item (or a draft issue pointing at it)
//! to the project board through a [`ProjectClient`].

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    resolve_field_value, ActionInputs, FieldResolution, FieldTarget, Item, ItemKind,
    ProjectReference, RunOutcome,
};
use crate::domain::ports::ProjectClient;

/// Runs one add-to-project invocation.
pub struct AddToProject {
    client: Arc<dyn ProjectClient>,
}

impl AddToProject {
    /// Create a pipeline backed by `client`.
    pub fn new(client: Arc<dyn ProjectClient>) -> Self {
        Self { client }
    }

    /// Add `item` to the project named in `inputs`.
    ///
    /// Returns [`RunOutcome::Skipped`] when the label filter rejects the item.
    /// A label map that names an unknown field or option is not an error: the
    /// item is still added and the field is left alone.
    ///
    /// The attach and set-field mutations are independent calls. A failure
    /// of the second leaves the item on the board without the field value.
    #[instrument(skip_all, fields(project_url = %inputs.project_url, item = ?item.number))]
    pub async fn run(&self, inputs: &ActionInputs, item: &Item) -> DomainResult<RunOutcome> {
        info!(owner = ?item.owner_login, labels = %item.labels.join(", "), "Processing issue/PR");

        if !inputs.label_filter.matches(&item.labels) {
            let reason = inputs.label_filter.skip_reason();
            info!(
                "Skipping issue {} because {reason}",
                item.number.map_or_else(|| "undefined".to_string(), |n| n.to_string())
            );
            return Ok(RunOutcome::Skipped { reason });
        }

        let resolution = resolve_field_value(inputs.label_map.as_deref(), &item.labels);
        if let Some(r) = &resolution {
            info!(field = %r.field_name, value = %r.field_value, "Resolved custom field");
        }

        let project = ProjectReference::parse(&inputs.project_url)?;
        debug!(
            owner = %project.owner_name,
            owner_type = %project.owner_type,
            number = project.project_number,
            "Parsed project URL"
        );

        let project_id = self.client.resolve_project_id(&project).await?;
        info!(%project_id, content_id = ?item.content_id, "Resolved project node ID");

        let target = match &resolution {
            Some(r) => self.locate_field(&project_id, r).await?,
            None => FieldTarget::default(),
        };

        if item.is_owned_by(&project.owner_name) {
            self.add_project_item(&project_id, item, &target).await
        } else {
            self.add_draft_issue(&project_id, item).await
        }
    }

    async fn locate_field(
        &self,
        project_id: &str,
        resolution: &FieldResolution,
    ) -> DomainResult<FieldTarget> {
        let fields = self.client.get_custom_fields(project_id).await?;
        let target = FieldTarget::locate(&fields, resolution);

        match (&target.field_id, &target.option_id) {
            (None, _) => warn!(
                field = %resolution.field_name,
                "Project has no single-select field with this name; field will not be set"
            ),
            (Some(_), None) => warn!(
                field = %resolution.field_name,
                value = %resolution.field_value,
                "Field has no option with this name; field will not be set"
            ),
            (Some(field_id), Some(option_id)) => {
                debug!(%field_id, %option_id, "Located custom field option");
            }
        }

        Ok(target)
    }

    async fn add_project_item(
        &self,
        project_id: &str,
        item: &Item,
        target: &FieldTarget,
    ) -> DomainResult<RunOutcome> {
        info!("Creating project item");
        let content_id = item
            .content_id
            .as_deref()
            .ok_or(DomainError::MissingContent("issue or pull request node id"))?;

        let item_id = self.client.attach_item(project_id, content_id).await?;

        let field_updated = match target.ids() {
            Some((field_id, option_id)) => {
                info!(%item_id, %field_id, %option_id, "Setting custom field value");
                self.client
                    .set_single_select_field(project_id, &item_id, field_id, option_id)
                    .await?;
                true
            }
            None => false,
        };

        Ok(RunOutcome::Added {
            item_id,
            kind: ItemKind::ProjectItem,
            field_updated,
        })
    }

    async fn add_draft_issue(&self, project_id: &str, item: &Item) -> DomainResult<RunOutcome> {
        info!("Creating draft issue in project");
        let title = item
            .html_url
            .as_deref()
            .ok_or(DomainError::MissingContent("issue or pull request URL"))?;

        let item_id = self.client.create_draft_issue(project_id, title).await?;

        Ok(RunOutcome::Added {
            item_id,
            kind: ItemKind::DraftIssue,
            field_updated: false,
        })
    }
}
