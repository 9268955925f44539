//! GitHub Actions runner integration.
//!
//! - Reading the triggering event payload (`GITHUB_EVENT_PATH`)
//! - Writing step outputs (`GITHUB_OUTPUT`) and workflow commands

pub mod event;
pub mod output;

pub use event::{item_from_payload, load_item};
pub use output::{escape_command_data, RunnerOutput};
