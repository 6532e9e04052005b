//! Shortlog rules.

use regex::Regex;

use crate::config::ShortlogConfig;
use crate::data::{CheckKind, Finding};
use crate::error::LintError;
use crate::mood::{check_imperative, PosTagger};

/// Compiled shortlog rules
#[derive(Debug, Clone)]
pub struct ShortlogRules {
    length: usize,
    regex: Option<(String, Regex)>,
    trailing_period: Option<bool>,
    imperative_check: bool,
    wip_check: bool,
}

impl ShortlogRules {
    /// Compiles the rules; an invalid regex is rejected here.
    pub fn new(config: &ShortlogConfig) -> Result<Self, LintError> {
        let regex = match config.regex.as_deref().filter(|r| !r.is_empty()) {
            Some(pattern) => Some((
                pattern.to_string(),
                LintError::compile_full("shortlog.regex", pattern)?,
            )),
            None => None,
        };

        Ok(Self {
            length: config.length,
            regex,
            trailing_period: config.trailing_period,
            imperative_check: config.imperative_check,
            wip_check: config.wip_check,
        })
    }

    /// Checks `shortlog`; `tagger` is only consulted by the imperative check.
    pub fn check(&self, shortlog: &str, tagger: &dyn PosTagger) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut push = |message: String| findings.push(Finding::new(CheckKind::Shortlog, message));

        let length = shortlog.chars().count();
        if length > self.length {
            push(format!(
                "Shortlog of the HEAD commit contains {length} character(s). \
                 This is {} character(s) longer than the limit ({length} > {}).",
                length - self.length,
                self.length
            ));
        }

        match self.trailing_period {
            Some(true) if !shortlog.ends_with('.') => {
                push("Shortlog of HEAD commit contains no period at end.".to_string())
            }
            Some(false) if shortlog.ends_with('.') => {
                push("Shortlog of HEAD commit contains a period at end.".to_string())
            }
            _ => {}
        }

        if let Some((pattern, regex)) = &self.regex {
            if !regex.is_match(shortlog) {
                push(format!(
                    "Shortlog of HEAD commit does not match given regex: {pattern}"
                ));
            }
        }

        // The WIP check below sees the topic-stripped text when this runs.
        let mut subject = shortlog;
        if self.imperative_check {
            subject = shortlog.split_once(':').map_or(shortlog, |(_, rest)| rest);
            if let Some(flaw) = check_imperative(subject, tagger) {
                push(format!(
                    "Shortlog of HEAD commit isn't in imperative mood! Bad words are '{}'",
                    flaw.word
                ));
            }
        }

        if self.wip_check {
            let head: String = subject.to_lowercase().chars().take(4).collect();
            if head.contains("wip") {
                push(
                    "This commit seems to be marked as work in progress and should not be \
                     used in production. Treat carefully."
                        .to_string(),
                );
            }
        }

        findings
    }
}
