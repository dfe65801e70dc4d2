//! Account database checks over `/etc/shadow` and `/etc/passwd`.
//!
//! Parsers take borrowed file contents; the `collect_*` probes read the
//! real databases and degrade to empty results when unreadable (reading
//! `/etc/shadow` normally requires root, and partial results are fine).

use std::fs;

use tracing::debug;

const SHADOW_PATH: &str = "/etc/shadow";
const PASSWD_PATH: &str = "/etc/passwd";

/// Account names exempt from the system-account shell check.
const EXEMPT_ACCOUNTS: [&str; 4] = ["root", "sync", "shutdown", "halt"];

/// Shells that do not permit interactive login.
const NOLOGIN_SHELLS: [&str; 2] = ["/sbin/nologin", "/bin/false"];

/// First UID conventionally assigned to human users.
const SYSTEM_UID_MAX: u32 = 1000;

/// One `/etc/passwd` entry, reduced to the fields the checks need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    pub name: String,
    pub uid: u32,
    pub shell: String,
}

/// Parse `/etc/passwd` content. Malformed lines are skipped.
pub fn parse_passwd(raw: &str) -> Vec<PasswdEntry> {
    let mut entries = Vec::new();
    for line in raw.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 7 {
            continue;
        }
        let Ok(uid) = fields[2].parse::<u32>() else {
            continue;
        };
        entries.push(PasswdEntry {
            name: fields[0].to_string(),
            uid,
            shell: fields[6].to_string(),
        });
    }
    entries
}

/// Accounts whose shadow `lastchg` field (days since epoch) is after today.
pub fn future_password_changes(shadow: &str, today_days: i64) -> Vec<String> {
    let mut names = Vec::new();
    for line in shadow.lines() {
        let mut fields = line.split(':');
        let Some(name) = fields.next() else { continue };
        let Some(lastchg) = fields.nth(1) else { continue };
        if let Ok(days) = lastchg.trim().parse::<i64>() {
            if days > today_days {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Accounts whose shadow password field is empty.
pub fn blank_password_accounts(shadow: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in shadow.lines() {
        let mut fields = line.split(':');
        let (Some(name), Some(password)) = (fields.next(), fields.next()) else {
            continue;
        };
        if !name.is_empty() && password.is_empty() {
            names.push(name.to_string());
        }
    }
    names
}

/// Accounts with numeric UID 0.
pub fn uid_zero_accounts(entries: &[PasswdEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.uid == 0)
        .map(|entry| entry.name.clone())
        .collect()
}

/// Non-exempt system accounts (UID < 1000) whose shell permits login.
pub fn system_accounts_with_valid_shell(entries: &[PasswdEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.uid < SYSTEM_UID_MAX)
        .filter(|entry| !EXEMPT_ACCOUNTS.contains(&entry.name.as_str()))
        .filter(|entry| !NOLOGIN_SHELLS.contains(&entry.shell.as_str()))
        .map(|entry| entry.name.clone())
        .collect()
}

/// Days since the Unix epoch, truncated.
pub fn days_since_epoch() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64 / 86_400)
        .unwrap_or_default()
}

pub fn read_shadow() -> Option<String> {
    match fs::read_to_string(SHADOW_PATH) {
        Ok(raw) => Some(raw),
        Err(err) => {
            debug!(path = SHADOW_PATH, error = %err, "shadow database unreadable");
            None
        }
    }
}

pub fn read_passwd() -> Vec<PasswdEntry> {
    match fs::read_to_string(PASSWD_PATH) {
        Ok(raw) => parse_passwd(&raw),
        Err(err) => {
            debug!(path = PASSWD_PATH, error = %err, "passwd database unreadable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;
