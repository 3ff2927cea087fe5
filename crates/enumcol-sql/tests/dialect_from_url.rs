use enumcol_core::Dialect;
use enumcol_sql::{Config, SqlDialect};
use pretty_assertions::assert_eq;

#[test]
fn from_url_schemes() {
    assert_eq!(SqlDialect::from_url("sqlite::memory:").unwrap().name(), "sqlite");
    assert_eq!(
        SqlDialect::from_url("postgresql://localhost/app").unwrap().name(),
        "postgresql"
    );
    assert_eq!(
        SqlDialect::from_url("postgres://localhost/app").unwrap().name(),
        "postgresql"
    );
    assert_eq!(
        SqlDialect::from_url("mysql://root@localhost/app").unwrap().name(),
        "mysql"
    );
}

#[test]
fn from_url_unsupported_scheme() {
    let err = SqlDialect::from_url("dynamodb://localhost").unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: no enum column dialect for database `dynamodb`"
    );
}

#[test]
fn from_url_invalid() {
    let err = SqlDialect::from_url("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn config_builder() {
    let dialect = Config::new()
        .url("mysql://localhost/app")
        .default_varchar_length(32)
        .dialect()
        .unwrap();

    assert_eq!(dialect.name(), "mysql");
    assert_eq!(
        dialect.varchar_type_declaration(&Default::default()),
        "VARCHAR(32)"
    );
}

#[test]
fn config_without_url() {
    let err = Config::new().dialect().unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn config_deserialize() {
    let config: Config = serde_json::from_str(
        r#"{ "url": "postgresql://localhost/app", "default_varchar_length": 50 }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        Config::new()
            .url("postgresql://localhost/app")
            .default_varchar_length(50)
    );
    assert_eq!(config.dialect().unwrap().name(), "postgresql");
}

#[test]
fn config_deserialize_rejects_unknown_fields() {
    let res = serde_json::from_str::<Config>(r#"{ "dialect": "mysql" }"#);
    assert!(res.is_err());
}

#[test]
fn capability_matches_flavor() {
    assert!(!SqlDialect::sqlite().capability().column_comments);
    assert!(SqlDialect::mysql().capability().column_comments);
    assert_eq!(
        SqlDialect::mysql().capability().storage_types.varchar,
        Some(65_535)
    );
}
