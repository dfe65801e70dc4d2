//! RPM package inventory, verification variances, and vendor GPG key checks.

use std::collections::HashMap;
use std::fs;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::command::CommandRunner;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Marker distinguishing the vendor release-signing key from other pubkeys.
const RELEASE_KEY_MARKER: &str = "release key";

/// `rpm -Va` line: variance code, optional config-file flag, absolute path.
fn variance_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+(c?)\s*(/[\w/\-.]+)$").expect("variance pattern"))
}

/// Parse `rpm -qa` output in `NAME===VERSION-RELEASE` line format.
///
/// Entries with an empty name or version are dropped.
pub fn parse_package_listing(raw: &str) -> HashMap<String, String> {
    let mut packages = HashMap::new();
    for line in raw.lines() {
        let Some((name, version)) = line.trim_start().split_once("===") else {
            continue;
        };
        if name.is_empty() || version.is_empty() {
            continue;
        }
        packages.insert(name.to_string(), version.to_string());
    }
    packages
}

/// Parse `rpm -Va` output into path -> variance code.
///
/// Lines flagged `c` are config files; their variances are expected and
/// excluded.
pub fn parse_file_variances(raw: &str) -> HashMap<String, String> {
    let mut variances = HashMap::new();
    for line in raw.lines() {
        let Some(caps) = variance_line_re().captures(line) else {
            continue;
        };
        if &caps[2] == "c" {
            continue;
        }
        variances.insert(caps[3].to_string(), caps[1].to_string());
    }
    variances
}

/// Whether the pubkey summaries contain the vendor's release-signing key.
///
/// Only summary lines naming a release key are considered; among those the
/// distribution's security contact address decides presence.
pub fn gpg_key_present(summaries: &str, contact: &str) -> bool {
    summaries
        .lines()
        .filter(|line| line.contains(RELEASE_KEY_MARKER))
        .any(|line| line.contains(contact))
}

/// Extract the lowercase `ID=` value from os-release content.
pub fn parse_os_release_id(raw: &str) -> Option<String> {
    for line in raw.lines() {
        if let Some(value) = line.trim().strip_prefix("ID=") {
            return Some(value.trim_matches('"').to_ascii_lowercase());
        }
    }
    None
}

pub fn os_release_id() -> Option<String> {
    let raw = fs::read_to_string(OS_RELEASE_PATH).ok()?;
    parse_os_release_id(&raw)
}

pub fn collect_installed_packages<R: CommandRunner>(runner: &R) -> HashMap<String, String> {
    match runner.output(
        "rpm",
        &["-qa", "--queryformat", "[%{NAME}===%{VERSION}-%{RELEASE}\n]"],
    ) {
        Ok(raw) => parse_package_listing(&raw),
        Err(err) => {
            debug!(error = %err, "rpm package listing unavailable");
            HashMap::new()
        }
    }
}

pub fn collect_file_variances<R: CommandRunner>(runner: &R) -> HashMap<String, String> {
    match runner.output("rpm", &["-Va", "--nomtime", "--nosize", "--nomd5", "--nolinkto"]) {
        Ok(raw) => parse_file_variances(&raw),
        Err(err) => {
            debug!(error = %err, "rpm verification unavailable");
            HashMap::new()
        }
    }
}

pub fn collect_gpg_key_present<R: CommandRunner>(runner: &R, contact: &str) -> bool {
    match runner.output("rpm", &["-q", "gpg-pubkey", "--qf", "%{SUMMARY}\n"]) {
        Ok(raw) => gpg_key_present(&raw, contact),
        Err(err) => {
            debug!(error = %err, "gpg pubkey query unavailable");
            false
        }
    }
}
