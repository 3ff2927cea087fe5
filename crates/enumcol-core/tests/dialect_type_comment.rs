use enumcol_core::{
    dialect::parse_type_comment,
    driver::Capability,
    schema::db::ColumnSpec,
    Dialect,
};

#[derive(Debug)]
struct Plain;

impl Dialect for Plain {
    fn name(&self) -> &str {
        "plain"
    }

    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    fn integer_type_declaration(&self, _spec: &ColumnSpec) -> String {
        "INT".to_string()
    }

    fn varchar_type_declaration(&self, _spec: &ColumnSpec) -> String {
        "TEXT".to_string()
    }
}

#[test]
fn default_type_comment() {
    assert_eq!(Plain.type_comment("status"), "(Type:status)");
}

#[test]
fn parse_type_comment_alone() {
    assert_eq!(Plain.parse_type_comment("(Type:status)"), Some("status"));
}

#[test]
fn parse_type_comment_after_user_text() {
    assert_eq!(
        parse_type_comment("Current lifecycle state(Type:order_status)"),
        Some("order_status")
    );
}

#[test]
fn parse_type_comment_trailing_whitespace() {
    assert_eq!(parse_type_comment("(Type:status)  "), Some("status"));
}

#[test]
fn parse_type_comment_missing_marker() {
    assert_eq!(parse_type_comment("just a comment"), None);
    assert_eq!(parse_type_comment("(status)"), None);
}

#[test]
fn parse_type_comment_marker_not_last() {
    assert_eq!(parse_type_comment("(Type:status) and more"), None);
}

#[test]
fn parse_type_comment_empty_name() {
    assert_eq!(parse_type_comment("(Type:)"), None);
    assert_eq!(parse_type_comment("(Type:a b)"), None);
}

#[test]
fn round_trip_type_comment() {
    let comment = Plain.type_comment("priority");
    assert_eq!(Plain.parse_type_comment(&comment), Some("priority"));
}
