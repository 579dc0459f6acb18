use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use svc_template::{get_settings, Cli};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");

        // Print the full error chain if available
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {err}");
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = get_settings().context("Failed to load settings")?;

    // RUST_LOG wins when set; otherwise the configured level applies.
    // Write to stderr so logs don't interfere with stdout output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from(settings.log_level).into())
                .from_env_lossy(),
        )
        .init();

    cli.execute()
}
