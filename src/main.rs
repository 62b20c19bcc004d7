//! docsift — document folder analyser.
//!
//! Thin binary entry point. All logic lives in the `docsift-core`
//! and `docsift-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = docsift_cli::Cli::parse();

    // Logs go to stderr; the report owns stdout.
    docsift_cli::logging::init(cli.verbose);

    tracing::info!("docsift starting");

    docsift_cli::run(cli)
}
