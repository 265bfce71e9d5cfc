use std::io::Write;

use tapline::config::{ConfigError, FilterScope, ServiceConfig};

#[test]
fn test_defaults() {
    let config = ServiceConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.include_only, None);
    assert_eq!(config.scroll_quiet_window_ms, 250);
    assert_eq!(config.filter_scope, FilterScope::All);
}

#[test]
fn test_host_property_key_alias() {
    let json = r#"{ "accessibility.includeOnly.packageNames": ["com.app.*", "com.other"] }"#;
    let config = ServiceConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.include_only,
        Some(vec!["com.app.*".to_string(), "com.other".to_string()])
    );
}

#[test]
fn test_full_config() {
    let json = r#"{
        "include_only": ["com.app"],
        "filter_scope": "scoped_only",
        "scroll_quiet_window_ms": 500,
        "queue_capacity": 32,
        "kernel_buffer": 64
    }"#;
    let config = ServiceConfig::from_json_str(json).unwrap();
    assert_eq!(config.filter_scope, FilterScope::ScopedOnly);
    assert_eq!(config.quiet_window().as_millis(), 500);
    assert_eq!(config.queue_capacity, 32);
    assert_eq!(config.kernel_buffer, 64);
}

#[test]
fn test_rejects_zero_capacity() {
    let err = ServiceConfig::from_json_str(r#"{ "queue_capacity": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {:?}", err);

    let err = ServiceConfig::from_json_str(r#"{ "kernel_buffer": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {:?}", err);
}

#[test]
fn test_rejects_bad_json() {
    let err = ServiceConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "include_only": ["com.file.*"] }}"#).unwrap();

    let config = ServiceConfig::load(file.path()).unwrap();
    assert_eq!(config.include_only, Some(vec!["com.file.*".to_string()]));

    let missing = ServiceConfig::load("/nonexistent/tapline.json").unwrap_err();
    assert!(matches!(missing, ConfigError::Io { .. }));
}
