//! Issue reference checking.
//!
//! Hosting platforms close issues referenced after a closing keyword
//! (`Fixes #12`, `Closes owner/repo#3, #4 and #5`). This module finds those
//! phrases in a commit body and reports every reference that would not be
//! understood by the host:
//!
//! 1. resolve the host of the first remote and its [`HostDialect`],
//! 2. [`PhraseExtractor`] finds the keyword phrases,
//! 3. [`ReferenceSplitter`] splits each phrase into tokens,
//! 4. [`ReferenceValidator`] classifies each token.

pub mod dialect;
pub mod phrase;
pub mod split;
pub mod validate;

pub use dialect::{dialect_for, HostDialect, CONJUNCTIONS};
pub use phrase::{PhraseExtractor, ReferencePhrase};
pub use split::ReferenceSplitter;
pub use validate::{Outcome, ReferenceShape, ReferenceValidator};

use crate::config::IssueConfig;
use crate::data::{CheckKind, Finding};
use crate::error::LintError;
use crate::vcs::{resolve_host, Backend, CommitSource, UnsupportedHostPolicy};

/// Finding emitted when no remote is configured (reporting backends only).
pub const NO_HOST_MESSAGE: &str = "No host configured in path.";

/// Finding emitted when the remote host has no dialect (reporting backends only).
pub const UNSUPPORTED_HOST_MESSAGE: &str = "Un-supported host in path.";

/// Checks closing-keyword references in commit bodies.
pub struct IssueReferenceChecker<'c> {
    backend: Backend,
    config: &'c IssueConfig,
}

impl<'c> IssueReferenceChecker<'c> {
    /// Creates a checker for `backend` with the given options.
    pub fn new(backend: Backend, config: &'c IssueConfig) -> Self {
        Self { backend, config }
    }

    /// Checks `body`, resolving the host from the remotes of `source`.
    ///
    /// Remotes are only queried when closing-issue checking is enabled.
    pub fn check(&self, body: &str, source: &dyn CommitSource) -> Result<Vec<Finding>, LintError> {
        if !self.config.close_issue {
            return Ok(Vec::new());
        }

        let remotes = source.remote_urls().unwrap_or_else(|err| {
            tracing::warn!("{err}; treating repository as having no remotes");
            Vec::new()
        });

        self.check_with_host(body, resolve_host(self.backend, &remotes).as_deref())
    }

    /// Checks `body` against the dialect of an already resolved `host`.
    pub fn check_with_host(&self, body: &str, host: Option<&str>) -> Result<Vec<Finding>, LintError> {
        if !self.config.close_issue {
            return Ok(Vec::new());
        }

        let Some(host) = host else {
            return Ok(self.unsupported_host(NO_HOST_MESSAGE));
        };
        let Some(dialect) = dialect_for(self.backend, host) else {
            tracing::debug!(backend = %self.backend, host, "No closing-keyword dialect for host");
            return Ok(self.unsupported_host(UNSUPPORTED_HOST_MESSAGE));
        };

        let scanned = if self.config.last_line_only && !body.is_empty() {
            body.lines().last().unwrap_or_default()
        } else {
            body
        };

        let shape = if self.config.full_url {
            ReferenceShape::FullUrl
        } else {
            ReferenceShape::Short
        };

        let extractor = PhraseExtractor::new(dialect.keyword_pattern, CONJUNCTIONS)?;
        let splitter = ReferenceSplitter::new(CONJUNCTIONS)?;
        let validator = ReferenceValidator::new(dialect, shape, host)?;

        let phrases = extractor.extract(scanned);
        if phrases.is_empty() {
            if self.config.enforce_reference {
                return Ok(vec![Finding::new(
                    CheckKind::Issue,
                    self.missing_reference_message(shape),
                )]);
            }
            return Ok(Vec::new());
        }

        let findings = phrases
            .iter()
            .flat_map(|phrase| splitter.split(phrase.text))
            .filter_map(|token| match validator.validate(&token) {
                Outcome::Valid => None,
                Outcome::InvalidReference(raw) => Some(format!(
                    "Invalid {} reference: {raw}",
                    shape.label()
                )),
                Outcome::InvalidIssueNumber(raw) => Some(format!("Invalid issue number: {raw}")),
            })
            .map(|message| Finding::new(CheckKind::Issue, message))
            .collect();

        Ok(findings)
    }

    fn unsupported_host(&self, message: &str) -> Vec<Finding> {
        match self.backend.unsupported_host_policy() {
            UnsupportedHostPolicy::Silent => Vec::new(),
            UnsupportedHostPolicy::Report => vec![Finding::new(CheckKind::Issue, message)],
        }
    }

    fn missing_reference_message(&self, shape: ReferenceShape) -> String {
        let location = if self.config.last_line_only {
            " in the last line"
        } else {
            ""
        };
        format!(
            "Body of HEAD commit does not contain any {} reference{location}.",
            shape.label()
        )
    }
}
