//! Validation of individual issue reference tokens.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::dialect::HostDialect;
use crate::error::LintError;

/// Issue numbers are positive integers without leading zeros.
static ISSUE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A[1-9][0-9]*\z").unwrap());

/// Expected form of issue references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceShape {
    /// `#123` or `owner/repo#123`.
    #[default]
    Short,
    /// A complete link to the issue on the host.
    FullUrl,
}

impl ReferenceShape {
    /// Wording used in findings ("issue" / "full issue").
    pub fn label(self) -> &'static str {
        match self {
            ReferenceShape::Short => "issue",
            ReferenceShape::FullUrl => "full issue",
        }
    }
}

/// Result of validating one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Well-formed reference.
    Valid,
    /// The token does not have the expected shape.
    InvalidReference(String),
    /// The shape matches but the issue number is malformed.
    InvalidIssueNumber(String),
}

impl Outcome {
    /// Whether the token passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

/// Validates tokens against one dialect's reference shape.
#[derive(Debug, Clone)]
pub struct ReferenceValidator {
    pattern: Regex,
}

impl ReferenceValidator {
    /// Builds a validator for `shape`; `host` is only used by full URLs.
    pub fn new(dialect: &HostDialect, shape: ReferenceShape, host: &str) -> Result<Self, LintError> {
        let source = match shape {
            ReferenceShape::Short => dialect.short_ref_pattern.to_string(),
            ReferenceShape::FullUrl => dialect.full_url_pattern(host),
        };

        Ok(Self {
            pattern: LintError::compile("reference", &format!(r"\A(?:{source})\z"))?,
        })
    }

    /// Classifies `token`. The token must match the shape in full.
    pub fn validate(&self, token: &str) -> Outcome {
        let Some(number) = self.pattern.captures(token).and_then(|caps| caps.get(1)) else {
            return Outcome::InvalidReference(token.to_string());
        };

        if ISSUE_NUMBER.is_match(number.as_str()) {
            Outcome::Valid
        } else {
            Outcome::InvalidIssueNumber(token.to_string())
        }
    }
}

impl fmt::Display for ReferenceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
