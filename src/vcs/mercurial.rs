//! Mercurial repository access through the `hg` command.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{Backend, CommitSource};
use crate::error::LintError;

/// Mercurial working copy, read by running `hg` in its directory.
pub struct HgRepository {
    root: PathBuf,
}

impl HgRepository {
    /// Uses `path` as the working directory for `hg` invocations.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            root: path.as_ref().to_path_buf(),
        }
    }

    /// Runs `hg` with `args` and returns `(stdout, stderr)`.
    fn run(&self, args: &[&str]) -> Result<(String, String), String> {
        let output = Command::new("hg")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| format!("failed to run hg: {e}"))?;

        Ok((
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

impl CommitSource for HgRepository {
    fn backend(&self) -> Backend {
        Backend::Mercurial
    }

    fn head_message(&self) -> Result<String, LintError> {
        let (stdout, stderr) = self
            .run(&["log", "-l", "1", "--template", "{desc}"])
            .map_err(|detail| LintError::MessageUnavailable {
                backend: Backend::Mercurial,
                detail,
            })?;

        if !stderr.is_empty() {
            return Err(LintError::MessageUnavailable {
                backend: Backend::Mercurial,
                detail: format!("{:?}", stderr),
            });
        }

        Ok(stdout)
    }

    fn remote_urls(&self) -> Result<Vec<String>, LintError> {
        let (stdout, _) =
            self.run(&["paths"])
                .map_err(|detail| LintError::RemotesUnavailable {
                    backend: Backend::Mercurial,
                    detail,
                })?;

        Ok(parse_paths(&stdout))
    }
}

/// Extracts the URLs from `hg paths` output (`name = url` per line).
pub(crate) fn parse_paths(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}
