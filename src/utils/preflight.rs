//! Preflight validation checks for early failure detection
//!
//! Commands call these before reading any commit so that a missing tool or a
//! wrong path fails with a clear message instead of an empty report.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::error::LintError;
use crate::vcs::{self, Backend, CommitSource};

/// Validate that the command line tool for `backend` can be run
///
/// Git is accessed through libgit2 and needs no external tool.
pub fn check_backend_available(backend: Backend) -> Result<()> {
    if backend == Backend::Git {
        return Ok(());
    }

    let check = Command::new(backend.command()).args(["--version"]).output();

    match check {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => bail!(
            "Mercurial (hg) failed to report its version.\n\
             Error: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(_) => Err(LintError::BackendUnavailable(
            "Mercurial (hg) is not installed or not in PATH.\n\
             Please install it from https://www.mercurial-scm.org/"
                .to_string(),
        )
        .into()),
    }
}

/// Validate the repository at `path` can be opened with `backend`
pub fn check_repository(backend: Backend, path: &Path) -> Result<Box<dyn CommitSource>> {
    check_backend_available(backend)?;

    vcs::open(backend, path).with_context(|| {
        format!(
            "Not in a {backend} repository: {}. Please run this command from within one or pass its path.",
            path.display()
        )
    })
}
