//! Commit message rules and the linter that runs them.

pub mod body;
pub mod shortlog;

pub use body::BodyRules;
pub use shortlog::ShortlogRules;

use tracing::debug;

use crate::config::LintConfig;
use crate::data::{CheckKind, CheckReport, Finding};
use crate::error::LintError;
use crate::issue::IssueReferenceChecker;
use crate::mood::{HeuristicTagger, PosTagger};
use crate::vcs::{CommitMessage, CommitSource};

/// Finding emitted for an empty HEAD message.
pub const EMPTY_MESSAGE: &str = "HEAD commit has no message.";

/// Runs every configured check against the HEAD commit.
pub struct Linter {
    config: LintConfig,
    shortlog: ShortlogRules,
    body: BodyRules,
    tagger: Box<dyn PosTagger>,
}

impl Linter {
    /// Compiles the configured rules with the built-in tagger.
    ///
    /// Fails before any commit is read if a configured regex is invalid.
    pub fn new(config: LintConfig) -> Result<Self, LintError> {
        Ok(Self {
            shortlog: ShortlogRules::new(&config.shortlog)?,
            body: BodyRules::new(&config.body)?,
            config,
            tagger: Box::new(HeuristicTagger),
        })
    }

    /// Replaces the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Reads the HEAD message from `source` and checks it.
    pub fn check(&self, source: &dyn CommitSource) -> Result<CheckReport, LintError> {
        let raw = source.head_message()?;
        let findings = self.check_message(&raw, source)?;
        debug!(findings = findings.len(), "Finished checking HEAD commit");
        Ok(CheckReport::new(source.backend(), findings))
    }

    /// Checks an already read message; `source` supplies the remotes.
    pub fn check_message(
        &self,
        raw: &str,
        source: &dyn CommitSource,
    ) -> Result<Vec<Finding>, LintError> {
        let message = CommitMessage::parse(raw);

        if message.is_empty() {
            if self.config.allow_empty_commit_message {
                return Ok(Vec::new());
            }
            return Ok(vec![Finding::new(CheckKind::Message, EMPTY_MESSAGE)]);
        }

        let mut findings = self.shortlog.check(&message.shortlog, self.tagger.as_ref());
        findings.extend(self.body.check(&message.body));
        findings.extend(
            IssueReferenceChecker::new(source.backend(), &self.config.issues)
                .check(&message.body, source)?,
        );

        Ok(findings)
    }
}
