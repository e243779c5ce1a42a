use super::*;

#[test]
fn display_value_passes_configured_value_through() {
    assert_eq!(display_value(Some("https://sso.example.com")), "https://sso.example.com");
}

#[test]
fn display_value_marks_absent_entries() {
    assert_eq!(display_value(None), "(not configured)");
}
