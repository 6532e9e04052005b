//! Check command: lints the HEAD commit message.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{ConfigLoader, LintConfig};
use crate::data::{CheckReport, OutputFormat};
use crate::rules::Linter;
use crate::utils::check_repository;
use crate::vcs::Backend;

/// Check command options - lints the message of the HEAD commit.
#[derive(Parser, Debug, Default)]
pub struct CheckCommand {
    /// Repository to check (defaults to the current directory).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Version control backend: git (default) or hg.
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Explicit path to a configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Accepts an empty commit message.
    #[arg(long)]
    pub allow_empty: bool,

    /// Maximum shortlog length in characters.
    #[arg(long, value_name = "N")]
    pub shortlog_length: Option<usize>,

    /// Regex the whole shortlog must match.
    #[arg(long, value_name = "REGEX")]
    pub shortlog_regex: Option<String>,

    /// Requires (true) or forbids (false) a period at the end of the shortlog.
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub trailing_period: Option<bool>,

    /// Disables the imperative mood check.
    #[arg(long)]
    pub no_imperative: bool,

    /// Disables the work-in-progress check.
    #[arg(long)]
    pub no_wip: bool,

    /// Maximum body line length in characters.
    #[arg(long, value_name = "N")]
    pub body_line_length: Option<usize>,

    /// Requires a commit body.
    #[arg(long)]
    pub force_body: bool,

    /// Body lines matching this regex are exempt from the length limit.
    #[arg(long, value_name = "REGEX")]
    pub ignore_length_regex: Vec<String>,

    /// Regex the whole (trimmed) body must match.
    #[arg(long, value_name = "REGEX")]
    pub body_regex: Option<String>,

    /// Checks issue references after closing keywords.
    #[arg(long)]
    pub close_issue: bool,

    /// Requires full issue URLs.
    #[arg(long)]
    pub full_url: bool,

    /// Only looks for issue references in the last body line.
    #[arg(long)]
    pub last_line: bool,

    /// Reports a body without any issue reference.
    #[arg(long)]
    pub enforce_reference: bool,
}

impl CheckCommand {
    /// Executes the check command, exiting with code 1 when there are findings.
    pub fn execute(self) -> Result<()> {
        let report = self.run()?;
        self.output_report(&report)?;

        let exit_code = report.exit_code();
        if exit_code != 0 {
            std::process::exit(exit_code);
        }
        Ok(())
    }

    /// Loads the configuration and lints HEAD without printing anything.
    pub fn run(&self) -> Result<CheckReport> {
        let path = self.repository_path();
        let config = self.effective_config()?;
        let backend = config.backend;

        let linter = Linter::new(config).context("Invalid lint configuration")?;
        let source = check_repository(backend, &path)?;

        linter
            .check(source.as_ref())
            .context("Failed to read the HEAD commit")
    }

    /// Loaded configuration with command line overrides applied.
    pub fn effective_config(&self) -> Result<LintConfig> {
        let path = self.repository_path();
        let loader = match &self.config {
            Some(file) => ConfigLoader::with_explicit(file.clone()),
            None => ConfigLoader::default(),
        };

        let mut config = loader
            .load(&path)
            .context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn repository_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    fn apply_overrides(&self, config: &mut LintConfig) {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        config.allow_empty_commit_message |= self.allow_empty;

        let shortlog = &mut config.shortlog;
        if let Some(length) = self.shortlog_length {
            shortlog.length = length;
        }
        if self.shortlog_regex.is_some() {
            shortlog.regex.clone_from(&self.shortlog_regex);
        }
        if self.trailing_period.is_some() {
            shortlog.trailing_period = self.trailing_period;
        }
        shortlog.imperative_check &= !self.no_imperative;
        shortlog.wip_check &= !self.no_wip;

        let body = &mut config.body;
        if let Some(length) = self.body_line_length {
            body.line_length = length;
        }
        body.force_body |= self.force_body;
        body.ignore_length_regex
            .extend(self.ignore_length_regex.iter().cloned());
        if self.body_regex.is_some() {
            body.regex.clone_from(&self.body_regex);
        }

        let issues = &mut config.issues;
        issues.close_issue |= self.close_issue;
        issues.full_url |= self.full_url;
        issues.last_line_only |= self.last_line;
        issues.enforce_reference |= self.enforce_reference;
    }

    /// Outputs the check report in the selected format.
    fn output_report(&self, report: &CheckReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let color = std::io::stdout().is_terminal();
                println!("{}", super::formatting::format_text_report(report, color));
            }
            OutputFormat::Json => {
                let json =
                    crate::data::to_json(report).context("Failed to serialize report to JSON")?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml =
                    crate::data::to_yaml(report).context("Failed to serialize report to YAML")?;
                println!("{yaml}");
            }
        }
        Ok(())
    }
}
