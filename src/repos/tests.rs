use super::*;

#[test]
fn parse_enabled_repos_filters_banners_and_summary() {
    let raw = "\
Loaded plugins: fastestmirror, langpacks
Loading mirror speeds from cached hostfile
 * base: mirror.example.com
repo id                          repo name                    status
base/7/x86_64                    CentOS-7 - Base              10,072
epel/x86_64                      Extra Packages for EL 7      13,791
updates/7/x86_64                 CentOS-7 - Updates           4,063
repolist: 27,926
";
    let repos = parse_enabled_repos(raw);
    assert_eq!(
        repos,
        vec!["base/7/x86_64", "epel/x86_64", "updates/7/x86_64"]
    );
}

#[test]
fn parse_enabled_repos_skips_blank_and_continuation_lines() {
    let raw = "base    CentOS Base\n\n:       continuation\n";
    assert_eq!(parse_enabled_repos(raw), vec!["base"]);
}

#[test]
fn gpgcheck_disabled_detected_across_files() {
    let clean = "[base]\nname=Base\ngpgcheck=1\n";
    let disabled = "[sketchy]\nname=Sketchy\ngpgcheck=0\n";
    assert!(!any_gpgcheck_disabled([clean]));
    assert!(any_gpgcheck_disabled([clean, disabled]));
}

#[test]
fn gpgcheck_pattern_tolerates_spacing_but_not_comments() {
    assert!(any_gpgcheck_disabled(["  gpgcheck = 0  \n"]));
    assert!(!any_gpgcheck_disabled(["# gpgcheck=0\n"]));
    assert!(!any_gpgcheck_disabled(["gpgcheck=10\n"]));
}
