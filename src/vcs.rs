//! Version control backends and the commit data they provide.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LintError;

pub mod git;
pub mod mercurial;
pub mod remote;

pub use git::GitRepository;
pub use mercurial::HgRepository;
pub use remote::resolve_host;

/// Supported version control tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Git, read through libgit2.
    #[default]
    Git,
    /// Mercurial, read through the `hg` command.
    #[serde(alias = "hg")]
    Mercurial,
}

/// What to do when the remote host has no closing-keyword dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedHostPolicy {
    /// Skip the issue reference check without a finding.
    Silent,
    /// Report the missing or unknown host as a finding.
    Report,
}

impl Backend {
    /// User prefix that marks an SSH-style remote (`git@host:path`).
    pub fn ssh_user_marker(self) -> &'static str {
        match self {
            Backend::Git => "git@",
            Backend::Mercurial => "hg@",
        }
    }

    /// Pattern whose first group extracts the host from an SSH-style remote.
    pub fn ssh_host_pattern(self) -> &'static str {
        match self {
            Backend::Git => r"@(\S+):",
            Backend::Mercurial => r"@(\S+)\.",
        }
    }

    /// Whether a leftover `user@` prefix is removed from the host label.
    pub fn strips_user_prefix(self) -> bool {
        matches!(self, Backend::Mercurial)
    }

    /// Policy applied when no supported host is configured.
    pub fn unsupported_host_policy(self) -> UnsupportedHostPolicy {
        match self {
            Backend::Git => UnsupportedHostPolicy::Silent,
            Backend::Mercurial => UnsupportedHostPolicy::Report,
        }
    }

    /// Name of the command line tool.
    pub fn command(self) -> &'static str {
        match self {
            Backend::Git => "git",
            Backend::Mercurial => "hg",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.command())
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(Backend::Git),
            "hg" | "mercurial" => Ok(Backend::Mercurial),
            other => Err(format!("unknown backend '{other}' (expected git or hg)")),
        }
    }
}

/// Source of the HEAD commit message and the configured remotes.
pub trait CommitSource {
    /// Backend this source reads from.
    fn backend(&self) -> Backend;

    /// Returns the raw message of the HEAD commit.
    fn head_message(&self) -> Result<String, LintError>;

    /// Returns the configured remote URLs, in configuration order.
    fn remote_urls(&self) -> Result<Vec<String>, LintError>;
}

/// Opens the repository at `path` with the given backend.
pub fn open(backend: Backend, path: &Path) -> Result<Box<dyn CommitSource>, LintError> {
    match backend {
        Backend::Git => Ok(Box::new(GitRepository::open_at(path)?)),
        Backend::Mercurial => Ok(Box::new(HgRepository::open_at(path))),
    }
}

/// A commit message split into shortlog and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitMessage {
    /// First line.
    pub shortlog: String,
    /// Everything after the first newline, including the separating blank
    /// line when present.
    pub body: String,
}

impl CommitMessage {
    /// Splits a raw message; trailing newlines are dropped first.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches('\n');
        match trimmed.split_once('\n') {
            Some((shortlog, body)) => Self {
                shortlog: shortlog.to_string(),
                body: body.to_string(),
            },
            None => Self {
                shortlog: trimmed.to_string(),
                body: String::new(),
            },
        }
    }

    /// Whether the message has no content at all.
    pub fn is_empty(&self) -> bool {
        self.shortlog.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_newline() {
        let msg = CommitMessage::parse("Shortlog\n\nBody line\n");
        assert_eq!(msg.shortlog, "Shortlog");
        assert_eq!(msg.body, "\nBody line");
    }

    #[test]
    fn parse_oneliner_has_empty_body() {
        let msg = CommitMessage::parse("one-liner-message\n");
        assert_eq!(msg.shortlog, "one-liner-message");
        assert!(msg.body.is_empty());
    }

    #[test]
    fn parse_missing_blank_line() {
        let msg = CommitMessage::parse("Shortlog\nOops, body too early");
        assert_eq!(msg.body, "Oops, body too early");
    }

    #[test]
    fn empty_message() {
        assert!(CommitMessage::parse("\n\n").is_empty());
        assert!(!CommitMessage::parse("x").is_empty());
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("git".parse::<Backend>().unwrap(), Backend::Git);
        assert_eq!("HG".parse::<Backend>().unwrap(), Backend::Mercurial);
        assert_eq!("mercurial".parse::<Backend>().unwrap(), Backend::Mercurial);
        assert!("svn".parse::<Backend>().is_err());
    }

    #[test]
    fn backend_policies_differ() {
        assert_eq!(
            Backend::Git.unsupported_host_policy(),
            UnsupportedHostPolicy::Silent
        );
        assert_eq!(
            Backend::Mercurial.unsupported_host_policy(),
            UnsupportedHostPolicy::Report
        );
    }
}
