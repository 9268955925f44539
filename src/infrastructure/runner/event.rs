//! Event payload loading.
//!
//! Only the parts of the webhook payload the pipeline needs are modelled.
//! Missing objects are tolerated: an event that carries neither an issue nor
//! a pull request becomes an [`Item`] with no labels and no identifiers.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Item;

#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    issue: Option<EventContent>,
    pull_request: Option<EventContent>,
    repository: Option<EventRepository>,
}

#[derive(Debug, Deserialize)]
struct EventContent {
    node_id: Option<String>,
    number: Option<u64>,
    html_url: Option<String>,
    #[serde(default)]
    labels: Vec<EventLabel>,
}

#[derive(Debug, Deserialize)]
struct EventLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EventRepository {
    owner: Option<EventOwner>,
}

#[derive(Debug, Deserialize)]
struct EventOwner {
    login: Option<String>,
}

/// Parse an event payload into the triggering item.
///
/// The issue takes precedence over the pull request when both are present.
pub fn item_from_payload(json: &str) -> DomainResult<Item> {
    let payload: EventPayload = serde_json::from_str(json)
        .map_err(|e| DomainError::InvalidEventPayload(e.to_string()))?;

    let owner_login = payload
        .repository
        .and_then(|r| r.owner)
        .and_then(|o| o.login);

    let Some(content) = payload.issue.or(payload.pull_request) else {
        return Ok(Item {
            owner_login,
            ..Item::default()
        });
    };

    let item = Item::new(
        content.node_id,
        owner_login,
        content.labels.iter().map(|l| l.name.as_str()),
        content.html_url,
    );
    Ok(match content.number {
        Some(number) => item.with_number(number),
        None => item,
    })
}

/// Load the triggering item from the event file at `path`.
///
/// An unset path or a file that does not exist yields an empty item with a
/// warning. A file that is not valid JSON fails the run.
pub fn load_item(path: Option<&Path>) -> DomainResult<Item> {
    let Some(path) = path else {
        warn!("No event payload path set; continuing with an empty payload");
        return Ok(Item::default());
    };

    if !path.exists() {
        warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
        return Ok(Item::default());
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidEventPayload(format!("failed to read {}: {e}", path.display()))
    })?;
    item_from_payload(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ISSUE_EVENT: &str = r#"{
        "action": "labeled",
        "issue": {
            "node_id": "I_kwDOissue",
            "number": 42,
            "html_url": "https://github.com/my-org/repo/issues/42",
            "labels": [{"name": "Bug", "color": "d73a4a"}, {"name": "P1"}]
        },
        "repository": {"owner": {"login": "my-org"}}
    }"#;

    #[test]
    fn test_issue_event() {
        let item = item_from_payload(ISSUE_EVENT).unwrap();
        assert_eq!(item.content_id.as_deref(), Some("I_kwDOissue"));
        assert_eq!(item.number, Some(42));
        assert_eq!(item.owner_login.as_deref(), Some("my-org"));
        assert_eq!(item.labels, vec!["bug".to_string(), "p1".to_string()]);
        assert_eq!(
            item.html_url.as_deref(),
            Some("https://github.com/my-org/repo/issues/42")
        );
    }

    #[test]
    fn test_pull_request_event() {
        let json = r#"{
            "pull_request": {
                "node_id": "PR_kwDOpr",
                "number": 7,
                "html_url": "https://github.com/me/repo/pull/7",
                "labels": []
            },
            "repository": {"owner": {"login": "me"}}
        }"#;
        let item = item_from_payload(json).unwrap();
        assert_eq!(item.content_id.as_deref(), Some("PR_kwDOpr"));
        assert!(item.labels.is_empty());
    }

    #[test]
    fn test_issue_takes_precedence_over_pull_request() {
        let json = r#"{
            "issue": {"node_id": "I_1"},
            "pull_request": {"node_id": "PR_1"}
        }"#;
        let item = item_from_payload(json).unwrap();
        assert_eq!(item.content_id.as_deref(), Some("I_1"));
    }

    #[test]
    fn test_event_without_issue_or_pr() {
        let json = r#"{"repository": {"owner": {"login": "my-org"}}}"#;
        let item = item_from_payload(json).unwrap();
        assert!(item.labels.is_empty());
        assert!(item.content_id.is_none());
        assert_eq!(item.owner_login.as_deref(), Some("my-org"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            item_from_payload("{oops"),
            Err(DomainError::InvalidEventPayload(_))
        ));
    }

    #[test]
    fn test_load_item_missing_file_is_empty() {
        let item = load_item(Some(Path::new("/nonexistent/event.json"))).unwrap();
        assert_eq!(item, Item::default());
    }

    #[test]
    fn test_load_item_without_path_is_empty() {
        assert_eq!(load_item(None).unwrap(), Item::default());
    }

    #[test]
    fn test_load_item_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ISSUE_EVENT.as_bytes()).unwrap();
        let item = load_item(Some(file.path())).unwrap();
        assert_eq!(item.number, Some(42));
    }
}
