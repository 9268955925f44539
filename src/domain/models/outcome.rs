//! Result of a single run.

use serde::Serialize;

/// How the item ended up on the project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// The issue or pull request itself was added.
    ProjectItem,
    /// A draft issue pointing at the item's URL was created.
    DraftIssue,
}

/// Outcome of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The label filter rejected the item. No output is emitted.
    Skipped { reason: String },
    /// The item was added to the project.
    Added {
        item_id: String,
        kind: ItemKind,
        field_updated: bool,
    },
}

impl RunOutcome {
    /// The `itemId` output, if the run produced one.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::Skipped { .. } => None,
            Self::Added { item_id, .. } => Some(item_id),
        }
    }
}
