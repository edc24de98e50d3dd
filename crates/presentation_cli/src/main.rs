//! WhatsAboveMe CLI entry point

#![allow(clippy::print_stdout)]

use clap::Parser;
use infrastructure::init_telemetry;
use presentation_cli::{Cli, execute, load_config};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_telemetry(&config.telemetry, cli.verbose)?;
    debug!(command = ?cli.command, "Starting");

    let output = execute(cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
