use couchdb_openapi::config::{ConnectionConfig, OutputFormat};
use couchdb_openapi::errors::SpecError;

#[test]
fn both_credentials_are_accepted() {
    let config = ConnectionConfig::new(
        "http://localhost:5984",
        Some("admin".to_string()),
        Some("secret".to_string()),
    )
    .expect("valid config");

    let credentials = config.credentials.expect("credentials must be present");
    assert_eq!(credentials.username, "admin");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn no_credentials_is_fine() {
    let config = ConnectionConfig::new("http://localhost:5984", None, None).expect("valid config");
    assert!(config.credentials.is_none());
}

#[test]
fn lone_username_is_a_config_error() {
    let err = ConnectionConfig::new("http://localhost:5984", Some("admin".to_string()), None)
        .expect_err("must reject one-sided credentials");

    assert!(matches!(err, SpecError::Config(_)), "got: {:?}", err);
    assert_eq!(err.class(), "config");
}

#[test]
fn lone_password_is_a_config_error() {
    let err = ConnectionConfig::new("http://localhost:5984", None, Some("secret".to_string()))
        .expect_err("must reject one-sided credentials");

    assert!(matches!(err, SpecError::Config(_)), "got: {:?}", err);
}

#[test]
fn malformed_url_is_rejected() {
    let err = ConnectionConfig::new("not a url", None, None)
        .expect_err("must reject malformed urls");
    assert_eq!(err.class(), "config");
}

#[test]
fn schemeless_url_is_rejected() {
    // url parses "localhost:5984" with scheme "localhost", so accept only http(s)
    let err = ConnectionConfig::new("localhost:5984", None, None)
        .expect_err("must reject schemeless urls");
    assert_eq!(err.class(), "config");
}

#[test]
fn base_strips_trailing_slash() {
    let config = ConnectionConfig::new("http://localhost:5984/", None, None).expect("valid config");
    assert_eq!(config.base(), "http://localhost:5984");
}

#[test]
fn format_parses_known_values() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
}

#[test]
fn unsupported_format_is_a_config_error() {
    let err = "xml".parse::<OutputFormat>().expect_err("xml is not supported");
    assert!(matches!(err, SpecError::Config(_)), "got: {:?}", err);
    assert_eq!(err.class(), "config");
}
