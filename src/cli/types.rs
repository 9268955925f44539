//! CLI type definitions
//!
//! Every action input is a long flag that falls back to the variable the
//! runner sets for it (`INPUT_<NAME>`, name upper-cased, hyphens kept).

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::RawInputs;

#[derive(Parser)]
#[command(name = "add-to-project")]
#[command(about = "Add an issue or pull request to a GitHub project board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// URL of the project, e.g. https://github.com/orgs/my-org/projects/7
    #[arg(long, env = "INPUT_PROJECT-URL")]
    pub project_url: Option<String>,

    /// Token with access to the project
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Comma-separated labels used to filter the item
    #[arg(long, env = "INPUT_LABELED")]
    pub labeled: Option<String>,

    /// How `labeled` is applied: and, or, not
    #[arg(long, env = "INPUT_LABEL-OPERATOR")]
    pub label_operator: Option<String>,

    /// JSON map of field name to [{"label", "fieldValue"}] entries
    #[arg(long, env = "INPUT_LABEL-MAP")]
    pub label_map: Option<String>,

    /// Path of the event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// File step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// YAML file with runtime settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("project_url", &self.project_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("labeled", &self.labeled)
            .field("label_operator", &self.label_operator)
            .field("label_map", &self.label_map)
            .field("event_path", &self.event_path)
            .field("output_file", &self.output_file)
            .field("config", &self.config)
            .field("json", &self.json)
            .finish()
    }
}

impl Cli {
    /// The action inputs, before validation.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            project_url: self.project_url.clone(),
            github_token: self.github_token.clone(),
            labeled: self.labeled.clone(),
            label_operator: self.label_operator.clone(),
            label_map: self.label_map.clone(),
        }
    }
}
