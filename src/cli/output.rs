//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::models::{ItemKind, RunOutcome};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

impl CommandOutput for RunOutcome {
    fn to_human(&self) -> String {
        match self {
            Self::Skipped { reason } => format!("Skipped: {reason}"),
            Self::Added {
                item_id,
                kind,
                field_updated,
            } => {
                let what = match kind {
                    ItemKind::ProjectItem => "Added project item",
                    ItemKind::DraftIssue => "Added draft issue",
                };
                if *field_updated {
                    format!("{what} {item_id} (custom field set)")
                } else {
                    format!("{what} {item_id}")
                }
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output() {
        let outcome = RunOutcome::Added {
            item_id: "PVTI_1".to_string(),
            kind: ItemKind::ProjectItem,
            field_updated: true,
        };
        assert_eq!(outcome.to_human(), "Added project item PVTI_1 (custom field set)");

        let skipped = RunOutcome::Skipped {
            reason: "it does not have one of the labels: bug".to_string(),
        };
        assert_eq!(
            skipped.to_human(),
            "Skipped: it does not have one of the labels: bug"
        );
    }

    #[test]
    fn test_json_output() {
        let outcome = RunOutcome::Skipped {
            reason: "r".to_string(),
        };
        assert_eq!(outcome.to_json()["status"], "skipped");
    }
}
