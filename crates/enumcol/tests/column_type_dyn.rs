mod support;

use enumcol::{
    schema::db::ColumnSpec,
    stmt::{self, Value},
    ColumnType, IntegerColumnEnumAdapter, StringColumnEnumAdapter,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use support::{AccountState, FakeDialect, Level};

fn integer() -> Arc<dyn ColumnType> {
    Arc::new(IntegerColumnEnumAdapter::<Level>::new())
}

fn string() -> Arc<dyn ColumnType> {
    Arc::new(StringColumnEnumAdapter::<AccountState>::new())
}

#[test]
fn storage_types() {
    assert_eq!(integer().storage_type(), stmt::Type::I64);
    assert_eq!(string().storage_type(), stmt::Type::String);
}

#[test]
fn convert_enum_to_database_value() {
    assert_eq!(
        integer().convert_to_database_value(&Level::Three).unwrap(),
        Value::I64(3)
    );
    assert_eq!(
        string()
            .convert_to_database_value(&AccountState::Closed)
            .unwrap(),
        Value::from("CLOSED")
    );
}

#[test]
fn convert_option_to_database_value() {
    assert_eq!(
        integer()
            .convert_to_database_value(&Some(Level::One))
            .unwrap(),
        Value::I64(1)
    );
    assert_eq!(
        string()
            .convert_to_database_value(&None::<AccountState>)
            .unwrap(),
        Value::Null
    );
}

#[test]
fn convert_wrong_type_to_database_value() {
    let err = integer()
        .convert_to_database_value(&AccountState::Active)
        .unwrap_err();
    assert!(err.is_enum_type_mismatch());
    assert_eq!(err.to_string(), "value is not of enum type Level");

    // The raw backing value is not an enum either.
    let err = string().convert_to_database_value(&"ACTIVE").unwrap_err();
    assert!(err.is_enum_type_mismatch());
}

#[test]
fn convert_to_app_value() {
    let dialect = FakeDialect::new();

    let value = integer()
        .convert_to_app_value(Value::I64(2), &dialect)
        .unwrap()
        .unwrap();
    assert_eq!(value.downcast_ref::<Level>(), Some(&Level::Two));

    let value = string()
        .convert_to_app_value(Value::from("ACTIVE"), &dialect)
        .unwrap()
        .unwrap();
    assert_eq!(
        value.downcast_ref::<AccountState>(),
        Some(&AccountState::Active)
    );
}

#[test]
fn convert_null_to_app_value() {
    let dialect = FakeDialect::new();
    assert!(integer()
        .convert_to_app_value(Value::Null, &dialect)
        .unwrap()
        .is_none());
    assert!(string()
        .convert_to_app_value(Value::Null, &dialect)
        .unwrap()
        .is_none());
}

#[test]
fn convert_invalid_to_app_value() {
    let dialect = FakeDialect::new();
    let err = integer()
        .convert_to_app_value(Value::I64(999), &dialect)
        .unwrap_err();
    assert!(err.is_invalid_enum_value());

    let err = string()
        .convert_to_app_value(Value::from("BOGUS"), &dialect)
        .unwrap_err();
    assert!(err.is_invalid_enum_value());
}

#[test]
fn declare_and_hint_through_trait_object() {
    let dialect = FakeDialect::new();
    let spec = ColumnSpec::new("state");

    assert_eq!(
        string().declare_column_type(&spec, &dialect),
        "FAKE_VARCHAR[state:None]"
    );
    assert_eq!(
        integer().declare_column_type(&spec, &dialect),
        "FAKE_INT[state]"
    );
    assert!(integer().requires_comment_hint());
    assert!(string().requires_comment_hint());
    assert_eq!(integer().enum_type().name, "Level");
}
