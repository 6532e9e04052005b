//! Configuration-related CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{ConfigLoader, LintConfig};

/// Configuration operations.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommands {
    /// Shows the effective configuration as YAML.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Repository whose configuration is shown (defaults to the current directory).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Explicit path to a configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
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
        let yaml = crate::data::to_yaml(&self.load()?)?;
        print!("{yaml}");
        Ok(())
    }

    fn load(&self) -> Result<LintConfig> {
        let path = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let loader = match &self.config {
            Some(file) => ConfigLoader::with_explicit(file.clone()),
            None => ConfigLoader::default(),
        };
        loader.load(&path).context("Failed to load configuration")
    }
}
