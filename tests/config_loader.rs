use farmdash::config::{
    Config, ConfigError, DEFAULT_BASE_URL, DEFAULT_ERROR_MESSAGE, DEFAULT_SIGNIN_PATH,
};
use std::path::PathBuf;

mod common;
use common::temp_config;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.session.signin_path, DEFAULT_SIGNIN_PATH);
    assert!(config.session.path.is_none());
    assert_eq!(config.notifications.fallback_error_message, DEFAULT_ERROR_MESSAGE);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("farmdash/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://farm.example.com/api/v1"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://farm.example.com/api/v1");
    assert_eq!(config.session.signin_path, DEFAULT_SIGNIN_PATH);
    assert_eq!(config.notifications.fallback_error_message, DEFAULT_ERROR_MESSAGE);
}

#[test]
fn test_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://10.0.0.5:5000/api/v1"

[session]
path = "/var/lib/farmdash/session.json"
signin_path = "/login"

[notifications]
fallback_error_message = "Something went wrong"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.session.signin_path, "/login");
    assert_eq!(
        config.session_path(),
        PathBuf::from("/var/lib/farmdash/session.json")
    );
    assert_eq!(
        config.notifications.fallback_error_message,
        "Something went wrong"
    );
}

#[test]
fn test_session_path_defaults_next_to_config() {
    let config = Config::default();
    assert!(config.session_path().ends_with("farmdash/session.json"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_base_url() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    assert!(matches!(
        Config::resolve(&path, None, None),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.api.base_url = "ftp://farm.example.com".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("http")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_relative_signin_path() {
    let mut config = Config::default();
    config.session.signin_path = "signin".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_env_override_replaces_base_url() {
    let mut config = Config::default();
    config.override_base_url(Some("https://override.example.com/api/v1".to_string()));
    assert_eq!(config.api.base_url, "https://override.example.com/api/v1");

    config.override_base_url(Some("   ".to_string()));
    config.override_base_url(None);
    assert_eq!(config.api.base_url, "https://override.example.com/api/v1");
}

#[test]
fn test_override_rescues_invalid_file_value() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "not a url"
"#,
    );

    let from_env = Config::resolve(
        &path,
        Some("http://farm.local/api/v1".to_string()),
        None,
    )
    .unwrap();
    assert_eq!(from_env.api.base_url, "http://farm.local/api/v1");

    let from_flag = Config::resolve(
        &path,
        None,
        Some("https://farm.example.com/api/v1".to_string()),
    )
    .unwrap();
    assert_eq!(from_flag.api.base_url, "https://farm.example.com/api/v1");
}

#[test]
fn test_flag_beats_environment() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::resolve(
        &dir.path().join("absent.toml"),
        Some("http://env.local/api/v1".to_string()),
        Some("http://flag.local/api/v1".to_string()),
    )
    .unwrap();
    assert_eq!(config.api.base_url, "http://flag.local/api/v1");
}

#[test]
fn test_invalid_override_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = Config::resolve(
        &dir.path().join("absent.toml"),
        None,
        Some("farm.local".to_string()),
    );
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
