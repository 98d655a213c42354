use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_accepts_common_spellings() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn defaults_with_access_token() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_ACCESS_TOKEN", "secret")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.cookie_secure);
    assert!(!cfg.auth_disabled());
    assert!(cfg.access_token_matches("secret"));
}

#[test]
fn missing_access_token_is_an_error() {
    assert_eq!(ServerConfig::from_lookup(lookup_from(&[])), Err(ConfigError::MissingAccessToken));
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[("AUTH_ACCESS_TOKEN", "   ")])),
        Err(ConfigError::MissingAccessToken)
    );
}

#[test]
fn auth_disabled_needs_no_token() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_DISABLED", "true")])).unwrap();
    assert!(cfg.auth_disabled());
    assert!(!cfg.access_token_matches(""));
}

#[test]
fn parses_port_and_cookie_secure() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("COOKIE_SECURE", "on"),
        ("AUTH_DISABLED", "0"),
        ("AUTH_ACCESS_TOKEN", "t"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.cookie_secure);
    assert!(!cfg.auth_disabled());
}

#[test]
fn invalid_port_is_reported() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http"), ("AUTH_DISABLED", "1")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });
}

#[test]
fn invalid_bool_is_reported() {
    let err = ServerConfig::from_lookup(lookup_from(&[("AUTH_DISABLED", "sometimes")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBool { key: "AUTH_DISABLED", value: "sometimes".into() });
}

#[test]
fn blank_bool_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", ""), ("AUTH_ACCESS_TOKEN", "t")])).unwrap();
    assert!(!cfg.cookie_secure);
}

// =============================================================================
// access_token_matches
// =============================================================================

#[test]
fn access_token_matches_trims_candidate() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_ACCESS_TOKEN", " secret ")])).unwrap();
    assert!(cfg.access_token_matches("secret"));
    assert!(cfg.access_token_matches("  secret\n"));
}

#[test]
fn access_token_mismatch_is_rejected() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_ACCESS_TOKEN", "secret")])).unwrap();
    assert!(!cfg.access_token_matches("Secret"));
    assert!(!cfg.access_token_matches(""));
}

#[test]
fn debug_output_hides_token_digest() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_ACCESS_TOKEN", "secret")])).unwrap();
    assert!(format!("{cfg:?}").contains("AccessToken { .. }"));
}
