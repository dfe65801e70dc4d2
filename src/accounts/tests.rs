use super::*;

const SAMPLE_PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
root2:x:0:0::/root:/bin/bash
bin:x:1:1:bin:/bin:/sbin/nologin
sync:x:5:0:sync:/sbin:/bin/sync
appuser:x:500:500::/home/appuser:/bin/bash
svc:x:501:501::/var/lib/svc:/sbin/nologin
alice:x:1000:1000::/home/alice:/bin/bash
";

#[test]
fn parse_passwd_skips_malformed_lines() {
    let entries = parse_passwd("broken line\nroot:x:0:0:root:/root:/bin/bash\nnouid:x:abc:0::/:/bin/sh\n");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "root");
    assert_eq!(entries[0].uid, 0);
    assert_eq!(entries[0].shell, "/bin/bash");
}

#[test]
fn uid_zero_accounts_collects_every_zero_uid_entry() {
    let entries = parse_passwd(SAMPLE_PASSWD);
    assert_eq!(uid_zero_accounts(&entries), vec!["root", "root2"]);
}

#[test]
fn system_account_with_login_shell_is_flagged() {
    let entries = parse_passwd(SAMPLE_PASSWD);
    let flagged = system_accounts_with_valid_shell(&entries);
    assert!(flagged.contains(&"appuser".to_string()));
    // nologin shell excludes the otherwise-matching service account
    assert!(!flagged.contains(&"svc".to_string()));
    // exempt names and human-range UIDs stay out
    assert!(!flagged.contains(&"root".to_string()));
    assert!(!flagged.contains(&"sync".to_string()));
    assert!(!flagged.contains(&"alice".to_string()));
    // root2 shares UID 0 but is not an exempt name
    assert!(flagged.contains(&"root2".to_string()));
}

#[test]
fn future_password_change_detected_from_lastchg_field() {
    let shadow = "\
root:$6$hash:18000:0:99999:7:::
evil:$6$hash:99999:0:99999:7:::
svc:!!:18500:0:99999:7:::
";
    let names = future_password_changes(shadow, 19_000);
    assert_eq!(names, vec!["evil"]);
}

#[test]
fn future_password_change_skips_malformed_lastchg() {
    let shadow = "weird:$6$hash:notanumber:0:99999:7:::\nempty:$6$hash::0:99999:7:::\n";
    assert!(future_password_changes(shadow, 19_000).is_empty());
}

#[test]
fn blank_password_accounts_detected_by_empty_field() {
    let shadow = "\
svc::18000:0:99999:7:::
root:$6$hash:18000:0:99999:7:::
locked:!!:18000:0:99999:7:::
svc-backup::18000:0:99999:7:::
";
    let names = blank_password_accounts(shadow);
    // hyphenated names count too; the password field is what matters
    assert_eq!(names, vec!["svc", "svc-backup"]);
}

#[test]
fn days_since_epoch_is_plausible() {
    let days = days_since_epoch();
    // 2020-01-01 is day 18262; sanity-check we are past it
    assert!(days > 18_262);
}
