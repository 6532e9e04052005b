//! Configuration for commit linting
//!
//! Settings are read from YAML. Every field has a default, so an empty or
//! partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LintError;
use crate::vcs::Backend;

/// File name looked up at the repository root.
pub const REPO_CONFIG_FILE: &str = ".headlint.yaml";

/// Complete lint configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Version control backend of the repository
    pub backend: Backend,

    /// Whether an empty HEAD commit message is acceptable
    pub allow_empty_commit_message: bool,

    /// Shortlog rules
    pub shortlog: ShortlogConfig,

    /// Body rules
    pub body: BodyConfig,

    /// Issue reference rules
    pub issues: IssueConfig,
}

/// Shortlog rules
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShortlogConfig {
    /// Maximum length in characters
    pub length: usize,

    /// Regex the whole shortlog must match
    pub regex: Option<String>,

    /// `true` requires a trailing period, `false` forbids it, unset ignores it
    pub trailing_period: Option<bool>,

    /// Whether the shortlog must be in imperative mood
    pub imperative_check: bool,

    /// Whether a WIP marker is reported
    pub wip_check: bool,
}

impl Default for ShortlogConfig {
    fn default() -> Self {
        Self {
            length: 50,
            regex: None,
            trailing_period: None,
            imperative_check: true,
            wip_check: true,
        }
    }
}

/// Body rules
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodyConfig {
    /// Maximum line length in characters
    pub line_length: usize,

    /// Whether a body is required
    pub force_body: bool,

    /// Lines matching any of these regexes are exempt from the length limit
    pub ignore_length_regex: Vec<String>,

    /// Regex the whole (trimmed) body must match
    pub regex: Option<String>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            line_length: 72,
            force_body: false,
            ignore_length_regex: Vec::new(),
            regex: None,
        }
    }
}

/// Issue reference rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IssueConfig {
    /// Check references after closing keywords (`Fixes #12`)
    pub close_issue: bool,

    /// Require full issue URLs instead of `#12`
    pub full_url: bool,

    /// Only look at the last line of the body
    pub last_line_only: bool,

    /// Report a body without any closing reference
    pub enforce_reference: bool,
}

impl LintConfig {
    /// Parses a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, LintError> {
        Self::parse(yaml).map_err(|e| LintError::Config(e.to_string()))
    }

    fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Loads a YAML file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LintError::Config(format!("{}: {e}", path.display())))?;

        Self::parse(&content)
            .map_err(|e| LintError::Config(format!("{}: {e}", path.display())))
    }
}

/// Locates the configuration for a repository
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    user_config: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            explicit: None,
            user_config: Self::default_user_config_path(),
        }
    }
}

impl ConfigLoader {
    /// Loader that uses `path` instead of the lookup chain
    pub fn with_explicit(path: PathBuf) -> Self {
        Self {
            explicit: Some(path),
            ..Self::default()
        }
    }

    /// Overrides the user-level configuration path
    pub fn with_user_config(mut self, path: Option<PathBuf>) -> Self {
        self.user_config = path;
        self
    }

    /// Returns `<config dir>/headlint/config.yaml`
    pub fn default_user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("headlint").join("config.yaml"))
    }

    /// Resolves the file to load for `repo_root`, if any
    pub fn locate(&self, repo_root: &Path) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return Some(explicit.clone());
        }

        let repo_file = repo_root.join(REPO_CONFIG_FILE);
        if repo_file.is_file() {
            return Some(repo_file);
        }

        self.user_config.clone().filter(|path| path.is_file())
    }

    /// Loads the configuration for `repo_root`, falling back to defaults
    pub fn load(&self, repo_root: &Path) -> Result<LintConfig, LintError> {
        match self.locate(repo_root) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                LintConfig::load_from_path(&path)
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(LintConfig::default())
            }
        }
    }
}
