//! Domain errors for the add-to-project pipeline.

use thiserror::Error;

/// Domain-level errors that can occur while adding an item to a project.
///
/// Everything except [`DomainError::LabelMapParse`] terminates the run.
/// A label map that fails to parse is logged and treated as "no field to
/// set"; it only surfaces as an error from the parsing helper itself.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error(
        "Invalid project URL: {0}. Project URL should match the format \
         <GitHub server domain name>/<orgs-or-users>/<ownerName>/projects/<projectNumber>"
    )]
    InvalidProjectUrl(String),

    #[error("Unsupported ownerType: {}. Must be one of 'orgs' or 'users'", .0.as_deref().unwrap_or("undefined"))]
    UnsupportedOwnerType(Option<String>),

    #[error("Error parsing label map: {0}")]
    LabelMapParse(String),

    #[error("Invalid event payload: {0}")]
    InvalidEventPayload(String),

    #[error("Event payload has no {0}; cannot add the item to the project")]
    MissingContent(&'static str),

    #[error("{0}")]
    RemoteCallFailure(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::LabelMapParse(err.to_string())
    }
}
