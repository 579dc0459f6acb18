//! Configuration-related CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::settings::{get_settings, Settings};

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the resolved settings.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Prints JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let settings = get_settings().context("Failed to resolve settings")?;
        println!("{}", self.render(settings)?);
        Ok(())
    }

    /// Renders settings in the selected format.
    pub fn render(&self, settings: &Settings) -> Result<String> {
        if self.json {
            serde_json::to_string_pretty(settings).context("Failed to serialize settings to JSON")
        } else {
            let yaml =
                serde_yaml::to_string(settings).context("Failed to serialize settings to YAML")?;
            Ok(yaml.trim_end().to_string())
        }
    }
}
