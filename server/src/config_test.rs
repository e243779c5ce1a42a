use super::*;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn from_vars_defaults_when_empty() {
    let cfg = ServerConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, None);
    assert_eq!(cfg.runtime.issuer, None);
    assert_eq!(cfg.runtime.client_id, None);
    assert!(!cfg.cookie_secure);
}

#[test]
fn from_vars_reads_all_values() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("PORT", "8080"),
        ("API_BASE_URL", "http://backend.internal:9000/v1/"),
        ("AUTH_ISSUER", "https://sso.example.com/realms/console"),
        ("AUTH_CLIENT_ID", "console-web"),
        ("COOKIE_SECURE", "yes"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url.as_deref(), Some("http://backend.internal:9000/v1"));
    assert_eq!(cfg.runtime.issuer.as_deref(), Some("https://sso.example.com/realms/console"));
    assert_eq!(cfg.runtime.client_id.as_deref(), Some("console-web"));
    assert!(cfg.cookie_secure);
}

#[test]
fn from_vars_invalid_port_errors() {
    let err = ServerConfig::from_vars(vars(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_vars_blank_values_are_absent() {
    let cfg = ServerConfig::from_vars(vars(&[("PORT", " "), ("API_BASE_URL", ""), ("AUTH_ISSUER", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, None);
    assert_eq!(cfg.runtime.issuer, None);
}

#[test]
fn cookie_secure_follows_https_backend_unless_overridden() {
    let cfg = ServerConfig::from_vars(vars(&[("API_BASE_URL", "https://api.example.com")])).unwrap();
    assert!(cfg.cookie_secure);

    let cfg =
        ServerConfig::from_vars(vars(&[("API_BASE_URL", "https://api.example.com"), ("COOKIE_SECURE", "off")]))
            .unwrap();
    assert!(!cfg.cookie_secure);

    let cfg = ServerConfig::from_vars(vars(&[("COOKIE_SECURE", "maybe")])).unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
