#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use silentwatch_core::SilentWatchError;
use silentwatch_gateway::config::{self, ProviderKind, ReporterConfig};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
generation:
  gemini:
    modle: "gemini-1.5-flash" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, SilentWatchError::BadRequest(_)));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.generation.provider, ProviderKind::Gemini);
    assert!(cfg.generation.api_key.is_none());
}

#[test]
fn api_key_is_not_read_from_file() {
    let bad = r#"
version: 1
generation:
  api_key: "leaked"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, SilentWatchError::UnsupportedVersion));
}

#[test]
fn rejects_out_of_range_values() {
    let bad_timeout = r#"
version: 1
generation:
  gemini:
    timeout_ms: 5
"#;
    assert!(config::load_from_str(bad_timeout).is_err());

    let bad_endpoint = r#"
version: 1
generation:
  gemini:
    endpoint: "ftp://example.test"
"#;
    assert!(config::load_from_str(bad_endpoint).is_err());

    let bad_host = r#"
version: 1
server:
  host: "not-an-ip"
"#;
    assert!(config::load_from_str(bad_host).is_err());
}

#[test]
fn offline_provider_parses() {
    let cfg = config::load_from_str("version: 1\ngeneration:\n  provider: offline\n").unwrap();
    assert_eq!(cfg.generation.provider, ProviderKind::Offline);
}

#[test]
fn env_overrides_port_and_key() {
    let mut cfg = ReporterConfig::default();
    config::apply_env_overrides(&mut cfg, env(&[("PORT", "8081"), ("GEMINI_API_KEY", " abc \n")]))
        .expect("overrides");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.generation.api_key.as_deref(), Some("abc"));
    assert_eq!(cfg.server.listen_addr().unwrap().to_string(), "0.0.0.0:8081");
}

#[test]
fn blank_key_counts_as_absent() {
    let mut cfg = ReporterConfig::default();
    config::apply_env_overrides(&mut cfg, env(&[("GEMINI_API_KEY", "   ")])).unwrap();
    assert!(cfg.generation.api_key.is_none());
    assert_eq!(cfg.server.port, 5000);
}

#[test]
fn invalid_port_env_is_rejected() {
    let mut cfg = ReporterConfig::default();
    let err = config::apply_env_overrides(&mut cfg, env(&[("PORT", "five thousand")]))
        .expect_err("must fail");
    assert!(matches!(err, SilentWatchError::BadRequest(_)));

    let err = config::apply_env_overrides(&mut cfg, env(&[("PORT", "0")])).expect_err("must fail");
    assert!(matches!(err, SilentWatchError::BadRequest(_)));
}

#[test]
fn debug_output_redacts_key() {
    let mut cfg = ReporterConfig::default();
    config::apply_env_overrides(&mut cfg, env(&[("GEMINI_API_KEY", "super-secret")])).unwrap();
    let dbg = format!("{cfg:?}");
    assert!(!dbg.contains("super-secret"));
    assert!(dbg.contains("<redacted>"));
}
