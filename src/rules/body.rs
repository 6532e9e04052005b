//! Body rules.

use regex::Regex;

use crate::config::BodyConfig;
use crate::data::{CheckKind, Finding};
use crate::error::LintError;

/// Compiled body rules
#[derive(Debug, Clone)]
pub struct BodyRules {
    line_length: usize,
    force_body: bool,
    ignore_length: Vec<Regex>,
    regex: Option<(String, Regex)>,
}

impl BodyRules {
    /// Compiles the rules; invalid regexes are rejected here.
    pub fn new(config: &BodyConfig) -> Result<Self, LintError> {
        let ignore_length = config
            .ignore_length_regex
            .iter()
            .map(|pattern| LintError::compile("body.ignore_length_regex", pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let regex = match config.regex.as_deref().filter(|r| !r.is_empty()) {
            Some(pattern) => Some((
                pattern.to_string(),
                LintError::compile_full("body.regex", pattern)?,
            )),
            None => None,
        };

        Ok(Self {
            line_length: config.line_length,
            force_body: config.force_body,
            ignore_length,
            regex,
        })
    }

    /// Checks `body`, which starts right after the shortlog's newline.
    pub fn check(&self, body: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if body.is_empty() {
            if self.force_body {
                findings.push(Finding::new(CheckKind::Body, "No commit message body at HEAD."));
            }
            return findings;
        }

        if !body.starts_with('\n') {
            findings.push(Finding::new(
                CheckKind::Body,
                "No newline found between shortlog and body at HEAD commit. Please add one.",
            ));
            return findings;
        }

        if let Some((pattern, regex)) = &self.regex {
            if !regex.is_match(body.trim()) {
                findings.push(Finding::new(
                    CheckKind::Body,
                    format!(
                        "No match found in commit message for the regular expression provided: {pattern}"
                    ),
                ));
            }
        }

        // The first line is the blank separator.
        let too_long = body
            .lines()
            .skip(1)
            .any(|line| line.chars().count() > self.line_length && !self.is_exempt(line));
        if too_long {
            findings.push(Finding::new(
                CheckKind::Body,
                format!(
                    "Body of HEAD commit contains too long lines. \
                     Commit body lines should not exceed {} characters.",
                    self.line_length
                ),
            ));
        }

        findings
    }

    fn is_exempt(&self, line: &str) -> bool {
        self.ignore_length.iter().any(|regex| regex.is_match(line))
    }
}
