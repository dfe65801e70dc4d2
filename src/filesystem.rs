//! Per-filesystem permission scans and firmware detection.
//!
//! Mount points come from `df -l -P` (tmpfs excluded); each one is searched
//! with `find -xdev` so a scan never crosses into another filesystem. Results
//! accumulate across mount points.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::CommandRunner;

const EFI_DIR: &str = "/sys/firmware/efi";

/// Paths collected by the five permission scans, across all mount points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemFindings {
    pub suid_sgid_files: Vec<String>,
    pub unowned_files: Vec<String>,
    pub ungrouped_files: Vec<String>,
    pub world_writable_files: Vec<String>,
    pub world_writable_dirs: Vec<String>,
}

/// Whether the host booted via EFI firmware.
pub fn efi_present() -> bool {
    Path::new(EFI_DIR).is_dir()
}

/// Parse `df -P` output into mount points (sixth column), skipping the header.
pub fn parse_mount_points(raw: &str) -> Vec<String> {
    let mut mounts = Vec::new();
    for line in raw.lines() {
        if line.starts_with("Filesystem") {
            continue;
        }
        if let Some(mount) = line.split_whitespace().nth(5) {
            mounts.push(mount.to_string());
        }
    }
    mounts
}

pub fn collect_findings<R: CommandRunner>(runner: &R) -> FilesystemFindings {
    let mut findings = FilesystemFindings::default();

    let mounts = match runner.output("df", &["-l", "--exclude-type=tmpfs", "-P"]) {
        Ok(raw) => parse_mount_points(&raw),
        Err(err) => {
            debug!(error = %err, "df unavailable, skipping filesystem scans");
            return findings;
        }
    };

    for mount in &mounts {
        scan_mount_point(runner, mount, &mut findings);
    }
    findings
}

fn scan_mount_point<R: CommandRunner>(
    runner: &R,
    mount: &str,
    findings: &mut FilesystemFindings,
) {
    findings
        .unowned_files
        .extend(find_paths(runner, &[mount, "-xdev", "-nouser"]));
    findings
        .ungrouped_files
        .extend(find_paths(runner, &[mount, "-xdev", "-nogroup"]));
    findings.suid_sgid_files.extend(find_paths(
        runner,
        &[
            mount, "-xdev", "-type", "f", "(", "-perm", "-4000", "-o", "-perm", "-2000", ")",
        ],
    ));
    findings.world_writable_files.extend(find_paths(
        runner,
        &[mount, "-xdev", "-type", "f", "-perm", "-0002"],
    ));
    findings.world_writable_dirs.extend(find_paths(
        runner,
        &[
            mount, "-xdev", "-type", "d", "(", "-perm", "-0002", "-a", "!", "-perm", "-1000", ")",
        ],
    ));
}

fn find_paths<R: CommandRunner>(runner: &R, args: &[&str]) -> Vec<String> {
    match runner.output("find", args) {
        Ok(raw) => raw
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(err) => {
            debug!(mount = args[0], error = %err, "find unavailable");
            Vec::new()
        }
    }
}
