//! CIS benchmark security posture collection for RPM-based Linux hosts.
//!
//! One call to [`collect`] runs a fixed set of independent host inspections
//! (password policy violations, privileged accounts, package inventory and
//! integrity, repository configuration, subscription status, filesystem
//! permission anomalies, process confinement) and returns them as a single
//! [`PostureRecord`]. Every inspection degrades to its empty default when
//! the underlying tool or file is unavailable; no failure aborts the run.

pub mod accounts;
pub mod command;
pub mod filesystem;
pub mod packages;
pub mod processes;
pub mod repos;
pub mod subscription;

use std::collections::HashMap;
use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use command::{CommandRunner, ShellCommandRunner};
pub use filesystem::FilesystemFindings;

/// Subscription manager overall status.
///
/// Serializes as a plain string once probed, and as an empty map when the
/// subscription manager is absent or produced no status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscriptionStatus {
    Reported(String),
    Unavailable(HashMap<String, String>),
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self::Unavailable(HashMap::new())
    }
}

/// One full posture snapshot. Every field is present in the serialized
/// record even when its inspection found nothing or could not run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostureRecord {
    pub efi: bool,
    pub accounts_with_last_password_change_in_future: Vec<String>,
    pub accounts_with_blank_passwords: Vec<String>,
    pub accounts_with_uid_zero: Vec<String>,
    pub system_accounts_with_valid_shell: Vec<String>,
    pub installed_packages: HashMap<String, String>,
    pub package_system_file_variances: HashMap<String, String>,
    pub redhat_gpg_key_present: bool,
    pub root_path: Vec<String>,
    pub subscriptions: SubscriptionStatus,
    pub suid_sgid_files: Vec<String>,
    pub unowned_files: Vec<String>,
    pub ungrouped_files: Vec<String>,
    pub world_writable_files: Vec<String>,
    pub world_writable_dirs: Vec<String>,
    pub unconfined_daemons: Vec<String>,
    pub yum_enabled_repos: Vec<String>,
    pub yum_repos_gpgcheck_consistent: bool,
}

/// Collector configuration.
///
/// The vendor GPG contact table maps an os-release `ID` to the security
/// contact address expected in the release-signing key summary.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub gpg_contacts: HashMap<String, String>,
    pub default_gpg_contact: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        let mut gpg_contacts = HashMap::new();
        gpg_contacts.insert("centos".to_string(), "security@centos.org".to_string());
        Self {
            gpg_contacts,
            default_gpg_contact: "security@redhat.com".to_string(),
        }
    }
}

impl CollectorConfig {
    /// Security contact for the given os-release ID, falling back to the
    /// default vendor address.
    pub fn vendor_contact(&self, os_id: Option<&str>) -> &str {
        os_id
            .and_then(|id| self.gpg_contacts.get(id))
            .map_or(&self.default_gpg_contact, String::as_str)
    }
}

/// Run all inspections against the local host.
///
/// Returns `None` off Linux: the probes only make sense on RPM/yum hosts
/// with SELinux-labeled processes, and partial output elsewhere would be
/// misleading.
pub fn collect() -> Option<PostureRecord> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    Some(collect_with(&ShellCommandRunner, &CollectorConfig::default()))
}

/// Run all inspections through the given runner and configuration.
///
/// Inspections are independent; each degrades to its empty default on
/// failure without affecting the others.
pub fn collect_with<R: CommandRunner>(runner: &R, config: &CollectorConfig) -> PostureRecord {
    let mut record = PostureRecord {
        efi: filesystem::efi_present(),
        ..PostureRecord::default()
    };

    if let Some(shadow) = accounts::read_shadow() {
        record.accounts_with_last_password_change_in_future =
            accounts::future_password_changes(&shadow, accounts::days_since_epoch());
        record.accounts_with_blank_passwords = accounts::blank_password_accounts(&shadow);
    }

    let passwd = accounts::read_passwd();
    record.accounts_with_uid_zero = accounts::uid_zero_accounts(&passwd);
    record.system_accounts_with_valid_shell = accounts::system_accounts_with_valid_shell(&passwd);

    record.installed_packages = packages::collect_installed_packages(runner);
    record.package_system_file_variances = packages::collect_file_variances(runner);

    let os_id = packages::os_release_id();
    let contact = config.vendor_contact(os_id.as_deref());
    debug!(os_id = os_id.as_deref().unwrap_or("unknown"), contact, "vendor gpg contact resolved");
    record.redhat_gpg_key_present = packages::collect_gpg_key_present(runner, contact);

    record.root_path = invoking_path_entries();

    if let Some(status) = subscription::collect_status(runner) {
        record.subscriptions = SubscriptionStatus::Reported(status);
    }

    let findings = filesystem::collect_findings(runner);
    record.suid_sgid_files = findings.suid_sgid_files;
    record.unowned_files = findings.unowned_files;
    record.ungrouped_files = findings.ungrouped_files;
    record.world_writable_files = findings.world_writable_files;
    record.world_writable_dirs = findings.world_writable_dirs;

    record.unconfined_daemons = processes::collect_unconfined_daemons(runner);
    record.yum_enabled_repos = repos::collect_enabled_repos(runner);
    record.yum_repos_gpgcheck_consistent = repos::collect_gpgcheck_disabled();

    record
}

/// The invoking process's PATH entries, order and duplicates preserved.
fn invoking_path_entries() -> Vec<String> {
    match env::var("PATH") {
        Ok(raw) => split_path(&raw),
        Err(_) => Vec::new(),
    }
}

/// Split a PATH value on `:` without reordering or deduplicating.
pub fn split_path(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(':').map(str::to_string).collect()
}
