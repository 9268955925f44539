//! add-to-project entry point.

use clap::Parser;

use add_to_project::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli::execute(cli).await {
        cli::handle_error(&err, json);
    }
}
