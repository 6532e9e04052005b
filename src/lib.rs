//! # headlint
//!
//! Lints the message of the HEAD commit of a Git or Mercurial repository.
//!
//! ## Features
//!
//! - Shortlog length, trailing period, regex, imperative mood and WIP checks
//! - Body blank line, line length and regex checks
//! - Validation of issue references after closing keywords (`Fixes #12`)
//!   for GitHub, GitLab and Bitbucket
//!
//! ## Quick Start
//!
//! ```rust
//! use headlint::config::IssueConfig;
//! use headlint::issue::IssueReferenceChecker;
//! use headlint::vcs::Backend;
//!
//! let config = IssueConfig {
//!     close_issue: true,
//!     ..IssueConfig::default()
//! };
//! let checker = IssueReferenceChecker::new(Backend::Git, &config);
//! let findings = checker
//!     .check_with_host("Fixes #12 and #012", Some("github"))
//!     .unwrap();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].message, "Invalid issue number: #012");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod issue;
pub mod mood;
pub mod rules;
pub mod utils;
pub mod vcs;

pub use crate::cli::Cli;
pub use crate::error::LintError;
pub use crate::rules::Linter;

/// The current version of headlint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
