//! Check result types for commit message validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vcs::Backend;

/// Which group of rules produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Whole-message checks (empty message).
    Message,
    /// Shortlog checks.
    Shortlog,
    /// Body formatting checks.
    Body,
    /// Issue reference checks.
    Issue,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Message => write!(f, "message"),
            CheckKind::Shortlog => write!(f, "shortlog"),
            CheckKind::Body => write!(f, "body"),
            CheckKind::Issue => write!(f, "issue"),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule group that emitted the finding.
    pub check: CheckKind,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    /// Creates a finding.
    pub fn new(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

/// Findings for the HEAD commit of one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Backend the commit was read from.
    pub backend: Backend,
    /// Findings in emission order.
    pub findings: Vec<Finding>,
    /// Whether the commit passes all checks.
    pub passes: bool,
}

impl CheckReport {
    /// Creates a report from findings.
    pub fn new(backend: Backend, findings: Vec<Finding>) -> Self {
        let passes = findings.is_empty();
        Self {
            backend,
            findings,
            passes,
        }
    }

    /// Number of findings emitted by `check`.
    pub fn count(&self, check: CheckKind) -> usize {
        self.findings.iter().filter(|f| f.check == check).count()
    }

    /// Determines exit code based on the report.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passes)
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown format '{other}' (expected text, json or yaml)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
