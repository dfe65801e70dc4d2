//! Subscription manager status probe.

use std::path::Path;

use tracing::debug;

use crate::command::CommandRunner;

const SUBSCRIPTION_MANAGER_PATH: &str = "/usr/bin/subscription-manager";
const OVERALL_STATUS_LABEL: &str = "Overall Status";

/// Extract the overall status value, lowercased with all whitespace removed
/// (e.g. `Overall Status: Current` -> `current`).
pub fn parse_overall_status(raw: &str) -> Option<String> {
    for line in raw.lines() {
        if !line.contains(OVERALL_STATUS_LABEL) {
            continue;
        }
        let (_, value) = line.split_once(':')?;
        let normalized: String = value
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        return Some(normalized);
    }
    None
}

/// Probe subscription status. `None` when the subscription manager is not
/// installed or produced no usable status line.
pub fn collect_status<R: CommandRunner>(runner: &R) -> Option<String> {
    if !Path::new(SUBSCRIPTION_MANAGER_PATH).exists() {
        return None;
    }
    match runner.output("subscription-manager", &["status"]) {
        Ok(raw) => parse_overall_status(&raw),
        Err(err) => {
            debug!(error = %err, "subscription-manager status unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests;
