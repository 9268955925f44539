//! Label to custom field value mapping (`label-map` input).
//!
//! The input is a JSON object keyed by custom field name. Each value is a
//! list of `{ "label": ..., "fieldValue": ... }` entries:
//!
//! ```json
//! {
//!   "Priority": [
//!     { "label": "p1", "fieldValue": "High" },
//!     { "label": "p2", "fieldValue": "Medium" }
//!   ]
//! }
//! ```
//!
//! Resolution is first-match in document order, so the map keeps the
//! object's key order rather than hashing it.

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::domain::errors::{DomainError, DomainResult};

/// One `{label, fieldValue}` element from the label map.
///
/// Members that are missing or not strings are kept as `None`: an entry
/// without a label never matches, and a matching entry without a value
/// still ends the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFieldEntry {
    pub label: Option<String>,
    pub field_value: Option<String>,
}

impl LabelFieldEntry {
    fn from_value(field_name: &str, value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(mut object) => Ok(Self {
                label: take_string(&mut object, "label"),
                field_value: take_string(&mut object, "fieldValue"),
            }),
            other => Err(DomainError::LabelMapParse(format!(
                "entry for field '{field_name}' is not an object: {other}"
            ))),
        }
    }

    fn matches(&self, item_labels: &[String]) -> bool {
        self.label
            .as_ref()
            .is_some_and(|label| item_labels.contains(label))
    }
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Option<String> {
    match object.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// The custom field name and option name selected for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResolution {
    pub field_name: String,
    pub field_value: String,
}

/// Parsed label map: field names with their entries, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFieldMap {
    fields: Vec<(String, Vec<LabelFieldEntry>)>,
}

impl LabelFieldMap {
    /// Parse the raw `label-map` JSON.
    ///
    /// Field names whose value is not a list are dropped. A list element
    /// that is not an object fails the whole map.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(object) = value else {
            return Err(DomainError::LabelMapParse(format!(
                "expected a JSON object keyed by field name, got: {raw}"
            )));
        };

        let mut fields = Vec::with_capacity(object.len());
        for (field_name, value) in object {
            match value {
                Value::Array(items) => {
                    let entries = items
                        .into_iter()
                        .map(|item| LabelFieldEntry::from_value(&field_name, item))
                        .collect::<DomainResult<Vec<_>>>()?;
                    fields.push((field_name, entries));
                }
                other => {
                    debug!(field = %field_name, value = %other, "Skipping non-list label map entry");
                }
            }
        }

        Ok(Self { fields })
    }

    /// Resolve the field for an item carrying `item_labels`.
    ///
    /// The first entry, in document order, whose label is among `item_labels`
    /// ends the search. If that entry has no `fieldValue` nothing is resolved.
    /// Entry labels are compared exactly as written in the map; item labels
    /// are expected to be lower-cased already.
    pub fn resolve(&self, item_labels: &[String]) -> Option<FieldResolution> {
        let (field_name, entry) = self.fields.iter().find_map(|(field_name, entries)| {
            entries
                .iter()
                .find(|entry| entry.matches(item_labels))
                .map(|entry| (field_name, entry))
        })?;

        let Some(field_value) = &entry.field_value else {
            warn!(
                field = %field_name,
                label = ?entry.label,
                "Matching label map entry has no fieldValue; field will not be set"
            );
            return None;
        };

        Some(FieldResolution {
            field_name: field_name.clone(),
            field_value: field_value.clone(),
        })
    }
}

/// Resolve the custom field for an item from the optional `label-map` input.
///
/// Absent input resolves to nothing without a log line. Malformed JSON is
/// logged and also resolves to nothing; it never fails the run.
pub fn resolve_field_value(
    label_map: Option<&str>,
    item_labels: &[String],
) -> Option<FieldResolution> {
    let raw = label_map?;

    match LabelFieldMap::parse(raw) {
        Ok(map) => {
            let resolution = map.resolve(item_labels);
            debug!(?resolution, labels = ?item_labels, "Resolved label map");
            resolution
        }
        Err(err) => {
            error!("{err}");
            None
        }
    }
}
