//! Domain models for the add-to-project pipeline.

pub mod config;
pub mod field;
pub mod inputs;
pub mod item;
pub mod label_filter;
pub mod label_map;
pub mod outcome;
pub mod project;

pub use config::{Config, LogFormat, LoggingConfig};
pub use field::{FieldOption, FieldTarget, RemoteProjectField};
pub use inputs::{ActionInputs, RawInputs};
pub use item::Item;
pub use label_filter::{LabelFilter, LabelOperator};
pub use label_map::{resolve_field_value, FieldResolution, LabelFieldEntry, LabelFieldMap};
pub use outcome::{ItemKind, RunOutcome};
pub use project::{OwnerType, ProjectReference};
