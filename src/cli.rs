//! CLI interface for headlint.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod config;
pub(crate) mod formatting;
pub mod hosts;

/// headlint: lints the HEAD commit message.
#[derive(Parser)]
#[command(name = "headlint")]
#[command(about = "Lints the HEAD commit message of a Git or Mercurial repository", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Checks the HEAD commit message.
    Check(check::CheckCommand),
    /// Lists the supported hosting platforms.
    Hosts(hosts::HostsCommand),
    /// Configuration information.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(),
            Commands::Hosts(hosts_cmd) => hosts_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["headlint", "check", "repo", "--close-issue"]);
        assert!(matches!(cli.command, Commands::Check(ref c) if c.close_issue));

        let cli = Cli::parse_from(["headlint", "hosts", "--backend", "git"]);
        assert!(matches!(cli.command, Commands::Hosts(_)));

        let cli = Cli::parse_from(["headlint", "config", "show"]);
        assert!(matches!(cli.command, Commands::Config(_)));
    }
}
