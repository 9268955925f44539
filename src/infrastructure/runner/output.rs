//! Step outputs and workflow commands.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Heredoc delimiter for multi-line output values.
const MULTILINE_DELIMITER: &str = "ADD_TO_PROJECT_EOF";

/// Escape data for a `::command::data` workflow command.
pub fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Writes step outputs for the runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerOutput {
    /// Value of `GITHUB_OUTPUT`; outputs go to stdout commands when unset.
    output_file: Option<PathBuf>,
}

impl RunnerOutput {
    /// Create a writer for the given output file.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Record a step output.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?;
                file.write_all(format_output_entry(name, value)?.as_bytes())
                    .with_context(|| format!("Failed to write output file {}", path.display()))?;
            }
            None => {
                println!(
                    "::set-output name={}::{}",
                    escape_command_data(name),
                    escape_command_data(value)
                );
            }
        }
        Ok(())
    }

    /// Report a failure as an error annotation on stdout.
    pub fn set_failed(message: &str) {
        println!("::error::{}", escape_command_data(message));
    }
}

/// Format one entry of the `GITHUB_OUTPUT` file.
fn format_output_entry(name: &str, value: &str) -> Result<String> {
    if !value.contains('\n') {
        return Ok(format!("{name}={value}\n"));
    }
    if value.contains(MULTILINE_DELIMITER) {
        bail!("Output value for '{name}' contains the delimiter {MULTILINE_DELIMITER}");
    }
    Ok(format!(
        "{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n"
    ))
}
