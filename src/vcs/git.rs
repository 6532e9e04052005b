//! Git repository access through libgit2.

use std::path::Path;

use git2::Repository;

use super::{Backend, CommitSource};
use crate::error::LintError;

/// Pattern selecting remote URL entries from the git configuration.
const REMOTE_URL_ENTRIES: &str = r"^remote\..*\.url$";

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, LintError> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| unavailable(&e))?;

        Ok(Self { repo })
    }
}

impl CommitSource for GitRepository {
    fn backend(&self) -> Backend {
        Backend::Git
    }

    fn head_message(&self) -> Result<String, LintError> {
        let head = self.repo.head().map_err(|e| unavailable(&e))?;
        let commit = head.peel_to_commit().map_err(|e| unavailable(&e))?;

        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }

    fn remote_urls(&self) -> Result<Vec<String>, LintError> {
        let config = self.repo.config().map_err(|e| remotes_unavailable(&e))?;
        let mut entries = config
            .entries(Some(REMOTE_URL_ENTRIES))
            .map_err(|e| remotes_unavailable(&e))?;

        // Config order, not remote-name order: the first configured remote wins.
        let mut urls = Vec::new();
        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| remotes_unavailable(&e))?;
            if let Some(url) = entry.value() {
                urls.push(url.to_string());
            }
        }

        Ok(urls)
    }
}

fn unavailable(err: &git2::Error) -> LintError {
    LintError::MessageUnavailable {
        backend: Backend::Git,
        detail: err.message().to_string(),
    }
}

fn remotes_unavailable(err: &git2::Error) -> LintError {
    LintError::RemotesUnavailable {
        backend: Backend::Git,
        detail: err.message().to_string(),
    }
}
