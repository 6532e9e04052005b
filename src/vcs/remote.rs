//! Remote URL parsing and host resolution

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::Backend;

static GIT_SSH_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Backend::Git.ssh_host_pattern()).unwrap());

static HG_SSH_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Backend::Mercurial.ssh_host_pattern()).unwrap());

/// Resolve the hosting platform label from the configured remotes
///
/// Only the first remote is considered. Returns `None` when no remote is
/// configured. The label is the first dot-separated part of the remote's
/// authority, lowercased (`git@github.com:o/r` -> `github`). Remotes without
/// an authority, such as local paths, resolve to an empty label.
pub fn resolve_host(backend: Backend, remote_urls: &[String]) -> Option<String> {
    let url = remote_urls.first()?;

    let authority = if url.contains(backend.ssh_user_marker()) {
        ssh_host(backend, url).unwrap_or_else(|| network_location(url))
    } else {
        network_location(url)
    };

    let mut label = authority.split('.').next().unwrap_or_default();
    if backend.strips_user_prefix() {
        label = label.rsplit('@').next().unwrap_or_default();
    }

    let host = label.to_lowercase();
    tracing::debug!(%backend, %url, %host, "Resolved remote host");
    Some(host)
}

/// Extract the host of an SSH-style remote (`user@host:path`)
fn ssh_host(backend: Backend, url: &str) -> Option<String> {
    let pattern = match backend {
        Backend::Git => &*GIT_SSH_HOST,
        Backend::Mercurial => &*HG_SSH_HOST,
    };

    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Network location of a URL: `[user[:password]@]host[:port]`
fn network_location(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    let mut netloc = String::new();
    if !parsed.username().is_empty() {
        netloc.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }
    netloc.push_str(host);
    if let Some(port) = parsed.port() {
        netloc.push_str(&format!(":{port}"));
    }
    netloc
}
