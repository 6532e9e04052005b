//! Error types for commit linting.

use thiserror::Error;

use crate::vcs::Backend;

/// Errors raised while linting a commit.
///
/// Rule violations are never errors; they are reported as
/// [`Finding`](crate::data::Finding)s. These variants cover the cases where a
/// run cannot proceed at all.
#[derive(Error, Debug)]
pub enum LintError {
    /// The HEAD commit message could not be read.
    #[error("{backend}: {detail}")]
    MessageUnavailable {
        /// Backend that failed.
        backend: Backend,
        /// Error output of the backend.
        detail: String,
    },

    /// The configured remotes could not be listed.
    #[error("Failed to list {backend} remotes: {detail}")]
    RemotesUnavailable {
        /// Backend that failed.
        backend: Backend,
        /// Error output of the backend.
        detail: String,
    },

    /// A configured regular expression does not compile.
    #[error("Invalid {name} pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Which setting the pattern came from.
        name: &'static str,
        /// The offending pattern.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },

    /// The backend's command line tool is missing.
    #[error("{0}")]
    BackendUnavailable(String),

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LintError {
    /// Compiles `pattern`, attributing failures to the setting `name`.
    pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<regex::Regex, Self> {
        regex::Regex::new(pattern).map_err(|source| Self::InvalidPattern {
            name,
            pattern: pattern.to_string(),
            source,
        })
    }

    /// Compiles `pattern` so that it only matches a whole string.
    pub(crate) fn compile_full(name: &'static str, pattern: &str) -> Result<regex::Regex, Self> {
        Self::compile(name, pattern)?;
        Self::compile(name, &format!(r"\A(?:{pattern})\z"))
    }
}
