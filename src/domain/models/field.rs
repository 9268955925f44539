//! Remote custom field definitions and their lookup.

use super::label_map::FieldResolution;

/// An option of a single-select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub id: String,
    pub name: String,
}

/// A single-select custom field defined on a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProjectField {
    pub id: String,
    pub name: String,
    pub options: Vec<FieldOption>,
}

impl RemoteProjectField {
    /// Find an option by its display name.
    pub fn option_named(&self, name: &str) -> Option<&FieldOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Remote identifiers for a resolved field and value.
///
/// Either id may be missing when the project has no field or option with the
/// configured name. A partial target is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTarget {
    pub field_id: Option<String>,
    pub option_id: Option<String>,
}

impl FieldTarget {
    /// Look up the field by name and then the option by value name.
    pub fn locate(fields: &[RemoteProjectField], resolution: &FieldResolution) -> Self {
        let field = fields.iter().find(|f| f.name == resolution.field_name);
        Self {
            field_id: field.map(|f| f.id.clone()),
            option_id: field
                .and_then(|f| f.option_named(&resolution.field_value))
                .map(|o| o.id.clone()),
        }
    }

    /// Both ids, if the field and option were found.
    pub fn ids(&self) -> Option<(&str, &str)> {
        match (&self.field_id, &self.option_id) {
            (Some(field), Some(option)) => Some((field.as_str(), option.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priority_field() -> RemoteProjectField {
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

    fn resolution(field: &str, value: &str) -> FieldResolution {
        FieldResolution {
            field_name: field.to_string(),
            field_value: value.to_string(),
        }
    }

    #[test]
    fn test_locate_field_and_option() {
        let target = FieldTarget::locate(&[priority_field()], &resolution("Priority", "High"));
        assert_eq!(target.ids(), Some(("PVTSSF_priority", "opt_high")));
    }

    #[test]
    fn test_unknown_option_leaves_option_unset() {
        let target = FieldTarget::locate(&[priority_field()], &resolution("Priority", "Urgent"));
        assert_eq!(target.field_id.as_deref(), Some("PVTSSF_priority"));
        assert!(target.option_id.is_none());
        assert!(target.ids().is_none());
    }

    #[test]
    fn test_unknown_field_leaves_both_unset() {
        let target = FieldTarget::locate(&[priority_field()], &resolution("Status", "High"));
        assert_eq!(target, FieldTarget::default());
    }

    #[test]
    fn test_field_name_match_is_case_sensitive() {
        let target = FieldTarget::locate(&[priority_field()], &resolution("priority", "High"));
        assert!(target.field_id.is_none());
    }
}
