//! SELinux process confinement check over `ps -eZ` output.

use tracing::debug;

use crate::command::CommandRunner;

/// Substring marking the initial default context a daemon falls into when
/// no policy transition confined it.
const UNCONFINED_CONTEXT_MARKER: &str = "initrc";

/// Process names from `ps -eZ` lines whose security label carries the
/// initrc marker. The process name is the last whitespace-delimited field.
pub fn parse_unconfined_daemons(raw: &str) -> Vec<String> {
    let mut daemons = Vec::new();
    for line in raw.lines() {
        if !line.contains(UNCONFINED_CONTEXT_MARKER) {
            continue;
        }
        if let Some(name) = line.split_whitespace().next_back() {
            daemons.push(name.to_string());
        }
    }
    daemons
}

pub fn collect_unconfined_daemons<R: CommandRunner>(runner: &R) -> Vec<String> {
    match runner.output("ps", &["-eZ"]) {
        Ok(raw) => parse_unconfined_daemons(&raw),
        Err(err) => {
            debug!(error = %err, "ps unavailable");
            Vec::new()
        }
    }
}
