//! Command-line entry: wires configuration, logging, the GitHub client and
//! the runner I/O around the add-to-project pipeline.

pub mod output;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::github::GitHubClient;
use crate::application::AddToProject;
use crate::domain::models::{ActionInputs, RunOutcome};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::runner::{load_item, RunnerOutput};

pub use output::{output, CommandOutput};
pub use types::Cli;

/// Name of the step output carrying the project item id.
pub const ITEM_ID_OUTPUT: &str = "itemId";

/// Run the action with parsed arguments.
///
/// Emits `itemId` when an item was added. A skipped item is a success with
/// no output.
pub async fn execute(cli: Cli) -> Result<RunOutcome> {
    let config = ConfigLoader::load(cli.config.as_deref())?;
    // A subscriber may already be installed when embedded; keep going without.
    if let Err(err) = LoggerImpl::init(&config.logging) {
        tracing::debug!("{err:#}");
    }

    let inputs = ActionInputs::from_raw(cli.raw_inputs())?;
    let item = load_item(cli.event_path.as_deref())?;

    let client = GitHubClient::with_config(&inputs.github_token, &config)?;
    let pipeline = AddToProject::new(Arc::new(client));
    let outcome = pipeline.run(&inputs, &item).await?;

    if let Some(item_id) = outcome.item_id() {
        RunnerOutput::new(cli.output_file.clone())
            .set_output(ITEM_ID_OUTPUT, item_id)
            .context("Failed to set itemId output")?;
        info!(%item_id, "Item added to project");
    }

    output(&outcome, cli.json);
    Ok(outcome)
}

/// Report a fatal error to the runner and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    let message = format!("{err:#}");
    if json_mode {
        eprintln!(
            "{}",
            serde_json::json!({ "status": "failed", "error": message })
        );
    }
    RunnerOutput::set_failed(&message);
    std::process::exit(1);
}
