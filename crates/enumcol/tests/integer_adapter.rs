mod support;

use enumcol::{stmt::Value, schema::db::ColumnSpec, IntegerColumnEnumAdapter, IntegerEnum};
use pretty_assertions::assert_eq;
use support::{FakeDialect, Level};

fn adapter() -> IntegerColumnEnumAdapter<Level> {
    IntegerColumnEnumAdapter::new()
}

#[test]
fn round_trip_every_member() {
    let dialect = FakeDialect::new();

    for level in Level::VARIANTS {
        let stored = adapter().to_storage(Some(level));
        let loaded = adapter().from_storage(stored, &dialect).unwrap();
        assert_eq!(loaded.as_ref(), Some(level));
    }
}

#[test]
fn to_storage_returns_backing_integer() {
    assert_eq!(adapter().to_storage(Some(&Level::Two)), Some(2i64));
}

#[test]
fn to_storage_null() {
    assert_eq!(adapter().to_storage(None), None);
}

#[test]
fn from_storage_null() {
    let dialect = FakeDialect::new();
    assert_eq!(adapter().from_storage(Value::Null, &dialect).unwrap(), None);
    assert_eq!(adapter().from_storage(None::<i64>, &dialect).unwrap(), None);
}

#[test]
fn from_storage_rejects_unknown_value() {
    let dialect = FakeDialect::new();
    let err = adapter().from_storage(999i64, &dialect).unwrap_err();

    assert!(err.is_invalid_enum_value());
    assert_eq!(err.to_string(), "invalid value 999 for enum Level");
}

#[test]
fn from_storage_never_defaults() {
    let dialect = FakeDialect::new();
    for raw in [0i64, -1, 4, i64::MAX] {
        assert!(adapter().from_storage(raw, &dialect).is_err(), "raw={raw}");
    }
}

#[test]
fn from_storage_coerces_integer_widths() {
    let dialect = FakeDialect::new();
    assert_eq!(
        adapter().from_storage(Value::I32(3), &dialect).unwrap(),
        Some(Level::Three)
    );
    assert_eq!(
        adapter().from_storage(Value::U8(1), &dialect).unwrap(),
        Some(Level::One)
    );
}

#[test]
fn from_storage_coerces_numeric_string() {
    let dialect = FakeDialect::new();
    assert_eq!(
        adapter().from_storage("2", &dialect).unwrap(),
        Some(Level::Two)
    );
}

#[test]
fn from_storage_numeric_string_out_of_set() {
    let dialect = FakeDialect::new();
    let err = adapter().from_storage("999", &dialect).unwrap_err();
    assert!(err.is_invalid_enum_value());
}

#[test]
fn from_storage_non_numeric_string() {
    let dialect = FakeDialect::new();
    let err = adapter().from_storage("TWO", &dialect).unwrap_err();

    assert!(err.is_type_conversion());
    assert!(!err.is_invalid_enum_value());
}

#[test]
fn from_storage_boolean() {
    let dialect = FakeDialect::new();
    let err = adapter().from_storage(Value::Bool(true), &dialect).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn declare_column_type_delegates_to_dialect() {
    let dialect = FakeDialect::new();
    let spec = ColumnSpec::new("level").unsigned(true).nullable(true);

    assert_eq!(
        adapter().declare_column_type(&spec, &dialect),
        "FAKE_INT[level]"
    );
    assert_eq!(dialect.seen(), vec![spec]);
}

#[test]
fn requires_comment_hint() {
    assert!(adapter().requires_comment_hint());
}

#[test]
fn resolve_enum_type() {
    let id = adapter().resolve_enum_type();
    assert_eq!(id.name, "Level");
    assert!(id.is::<Level>());
    assert!(!id.is::<i64>());
}

#[test]
fn name_defaults_to_enum_type() {
    assert_eq!(adapter().name(), "Level");
    assert_eq!(adapter().named("level_enum").name(), "level_enum");
}

#[test]
fn adapters_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IntegerColumnEnumAdapter<Level>>();
}
