use super::*;

#[test]
fn overall_status_is_lowercased_and_stripped() {
    let raw = "\
+-------------------------------------------+
   System Status Details
+-------------------------------------------+
Overall Status: Current

";
    assert_eq!(parse_overall_status(raw), Some("current".to_string()));
}

#[test]
fn multi_word_status_loses_interior_whitespace() {
    let raw = "Overall Status: Invalid Subscription\n";
    assert_eq!(
        parse_overall_status(raw),
        Some("invalidsubscription".to_string())
    );
}

#[test]
fn missing_status_line_yields_none() {
    assert_eq!(parse_overall_status("System Status Details\n"), None);
    assert_eq!(parse_overall_status(""), None);
}
