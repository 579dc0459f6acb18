//! CLI interface for svc-template.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod config;

/// svc-template: service settings and diagnostics.
#[derive(Parser)]
#[command(name = "svc-template")]
#[command(about = "Service settings and diagnostics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Configuration inspection.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}
