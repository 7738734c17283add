//! Connect Four tools binary entry point.
//!
//! This is a thin wrapper around the connect4-tools library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration
//! 4. Runs the selected command
//!
//! Any failure exits with a non-zero status and the full error chain.

use anyhow::Result;
use connect4_tools::{Cli, run};

fn main() -> Result<()> {
    // Parse configuration from CLI args
    let cli = Cli::from_args();

    // Initialize tracing subscriber for logging; reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Configuration loaded: {:?}", cli.command);

    // Validate configuration
    cli.validate()?;

    run(&cli, &mut std::io::stdout().lock())?;

    Ok(())
}
