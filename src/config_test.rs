use super::*;

// =============================================================
// normalize_base_url
// =============================================================

#[test]
fn base_url_defaults_when_absent() {
    assert_eq!(normalize_base_url(None), DEFAULT_BASE_URL);
}

#[test]
fn base_url_trailing_slash_trimmed() {
    assert_eq!(normalize_base_url(Some("http://support.local/")), "http://support.local");
    assert_eq!(normalize_base_url(Some("http://support.local///")), "http://support.local");
}

#[test]
fn base_url_passed_through_otherwise() {
    assert_eq!(normalize_base_url(Some("https://desk.example:8443")), "https://desk.example:8443");
}

// =============================================================
// env_parse_u64
// =============================================================

#[test]
fn env_parse_u64_falls_back_for_unset_var() {
    assert_eq!(env_parse_u64("DESKCHAT_TEST_UNSET_TIMEOUT", 42), 42);
}

// =============================================================
// defaults
// =============================================================

#[test]
fn default_config_has_expected_values() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    assert!(config.session_file.ends_with("deskchat/session.json"));
}
