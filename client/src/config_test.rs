use super::*;

#[test]
fn from_vars_empty_leaves_everything_absent() {
    let config = RuntimeConfig::from_vars(Vec::<(String, String)>::new());
    assert_eq!(config.issuer, None);
    assert_eq!(config.client_id, None);
    assert_eq!(config, RuntimeConfig::default());
}

#[test]
fn from_vars_reads_issuer_and_client_id() {
    let config = RuntimeConfig::from_vars([
        ("AUTH_ISSUER", "https://sso.example.com/realms/console"),
        ("AUTH_CLIENT_ID", "console-web"),
    ]);
    assert_eq!(config.issuer.as_deref(), Some("https://sso.example.com/realms/console"));
    assert_eq!(config.client_id.as_deref(), Some("console-web"));
}

#[test]
fn from_vars_ignores_unrelated_names() {
    let config = RuntimeConfig::from_vars([("PATH", "/usr/bin"), ("AUTH_CLIENT_SECRET", "s3cret")]);
    assert_eq!(config, RuntimeConfig::default());
}

#[test]
fn from_vars_treats_blank_as_absent() {
    let config = RuntimeConfig::from_vars([("AUTH_ISSUER", "  ")]);
    assert_eq!(config.issuer, None);
}

#[test]
fn runtime_config_serializes_absent_as_null() {
    let json = serde_json::to_value(RuntimeConfig::default()).unwrap();
    assert_eq!(json, serde_json::json!({ "issuer": null, "client_id": null }));
}
