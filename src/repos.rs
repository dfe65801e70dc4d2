//! Yum repository configuration checks.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::command::CommandRunner;

const REPOS_DIR: &str = "/etc/yum.repos.d";

/// Explicitly disabled GPG checking in a repo definition.
fn gpgcheck_disabled_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*gpgcheck\s*=\s*0\s*$").expect("gpgcheck pattern"))
}

/// Parse `yum repolist enabled` output into repo IDs.
///
/// Filters plugin banners, the column header, mirror-list bullets, and the
/// trailing repolist summary; the repo ID is the first token of what remains.
pub fn parse_enabled_repos(raw: &str) -> Vec<String> {
    let mut repos = Vec::new();
    for line in raw.lines() {
        if line.starts_with("Loaded ") || line.starts_with("Loading ") {
            continue;
        }
        if line.starts_with("repo id") {
            continue;
        }
        if line.starts_with(" * ") {
            continue;
        }
        if line.starts_with("repolist:") {
            continue;
        }
        let Some(id) = line.split_whitespace().next() else {
            continue;
        };
        if id == ":" {
            continue;
        }
        repos.push(id.to_string());
    }
    repos
}

/// Whether any repo definition explicitly sets `gpgcheck=0`.
pub fn any_gpgcheck_disabled<'a>(repo_files: impl IntoIterator<Item = &'a str>) -> bool {
    repo_files
        .into_iter()
        .any(|raw| gpgcheck_disabled_re().is_match(raw))
}

pub fn collect_enabled_repos<R: CommandRunner>(runner: &R) -> Vec<String> {
    match runner.output("yum", &["repolist", "enabled"]) {
        Ok(raw) => parse_enabled_repos(&raw),
        Err(err) => {
            debug!(error = %err, "yum repolist unavailable");
            Vec::new()
        }
    }
}

pub fn collect_gpgcheck_disabled() -> bool {
    let dir = match fs::read_dir(REPOS_DIR) {
        Ok(dir) => dir,
        Err(err) => {
            debug!(path = REPOS_DIR, error = %err, "repo directory unreadable");
            return false;
        }
    };

    for entry in dir.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("repo") {
            continue;
        }
        if let Some(raw) = read_repo_file(&path) {
            if any_gpgcheck_disabled([raw.as_str()]) {
                return true;
            }
        }
    }
    false
}

fn read_repo_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "repo file unreadable");
            None
        }
    }
}

#[cfg(test)]
mod tests;
