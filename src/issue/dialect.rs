//! Closing-keyword dialects of the supported hosting platforms.
//!
//! Each row of [`DIALECTS`] describes one host of one backend. Differences
//! between backends (such as the Mercurial full-URL shape requiring a path
//! segment after the issue number) live in the data, not in separate code
//! paths.

use crate::vcs::Backend;

/// Keyword alternation recognized by GitHub.
pub const GITHUB_KEYWORDS: &str = r"[Cc]lose[sd]?|[Rr]esolve[sd]?|[Ff]ix(?:e[sd])?";

/// Keyword alternation recognized by GitLab and Bitbucket.
pub const GITLAB_KEYWORDS: &str =
    r"[Cc]los(?:e[sd]?|ing)|[Rr]esolv(?:e[sd]?|ing)|[Ff]ix(?:e[sd]|ing)?";

const GIT_SHORT_REF: &str = r"(?:\w+/\w+)?#(\S+)";
const HG_SHORT_REF: &str = r"(?:\w+/\w+)?#(\S+)/?";
const GIT_FULL_URL_REF: &str = r"https?://{host}\S+/issues/(\S+)";
const HG_FULL_URL_REF: &str = r"https?://{host}\S+/issues/(\S+)/\S+";

/// Placeholder replaced by the escaped host label in full-URL templates.
const HOST_PLACEHOLDER: &str = "{host}";

/// Regex fragments joining several references in one phrase.
pub const CONJUNCTIONS: &[&str] = &[r",", r"\sand\s"];

/// Reference grammar of one hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDialect {
    /// Backend whose remotes may point at this host.
    pub backend: Backend,
    /// Normalized host label (`github`, `gitlab`, ...).
    pub host_id: &'static str,
    /// Alternation of closing keywords.
    pub keyword_pattern: &'static str,
    /// Shape of `#123` / `owner/repo#123` references; group 1 is the number.
    pub short_ref_pattern: &'static str,
    /// Shape of full issue URLs, with a `{host}` placeholder; group 1 is the
    /// number.
    pub full_url_template: &'static str,
}

impl HostDialect {
    /// Full-URL shape for `host`, with the host regex-escaped.
    pub fn full_url_pattern(&self, host: &str) -> String {
        self.full_url_template
            .replace(HOST_PLACEHOLDER, &regex::escape(host))
    }
}

/// Registry of supported hosts.
pub static DIALECTS: &[HostDialect] = &[
    HostDialect {
        backend: Backend::Git,
        host_id: "github",
        keyword_pattern: GITHUB_KEYWORDS,
        short_ref_pattern: GIT_SHORT_REF,
        full_url_template: GIT_FULL_URL_REF,
    },
    HostDialect {
        backend: Backend::Git,
        host_id: "gitlab",
        keyword_pattern: GITLAB_KEYWORDS,
        short_ref_pattern: GIT_SHORT_REF,
        full_url_template: GIT_FULL_URL_REF,
    },
    HostDialect {
        backend: Backend::Mercurial,
        host_id: "bitbucket",
        keyword_pattern: GITLAB_KEYWORDS,
        short_ref_pattern: HG_SHORT_REF,
        full_url_template: HG_FULL_URL_REF,
    },
];

/// Looks up the dialect of `host_id` for `backend`.
pub fn dialect_for(backend: Backend, host_id: &str) -> Option<&'static HostDialect> {
    DIALECTS
        .iter()
        .find(|d| d.backend == backend && d.host_id == host_id)
}

/// All dialects available to `backend`, in registry order.
pub fn dialects(backend: Backend) -> impl Iterator<Item = &'static HostDialect> {
    DIALECTS.iter().filter(move |d| d.backend == backend)
}

/// Alternation of all conjunction fragments.
pub fn conjunction_alternation() -> String {
    CONJUNCTIONS.join("|")
}
