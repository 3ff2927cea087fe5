use crate::{driver::Capability, schema::db::ColumnSpec};

const TYPE_COMMENT_PREFIX: &str = "(Type:";

/// Database-specific knowledge the column adapters delegate to.
///
/// A dialect renders storage requests in its database's DDL syntax and
/// defines how a logical type name is embedded in a column comment. The
/// adapters never build SQL themselves; they forward the [`ColumnSpec`] they
/// were given, unmodified.
pub trait Dialect: core::fmt::Debug + Send + Sync {
    /// Name of the database, e.g. `"postgresql"`.
    fn name(&self) -> &str;

    /// Limits and features of the database.
    fn capability(&self) -> &Capability;

    /// Native integer column declaration for `spec`.
    fn integer_type_declaration(&self, spec: &ColumnSpec) -> String;

    /// Variable-length text column declaration for `spec`.
    fn varchar_type_declaration(&self, spec: &ColumnSpec) -> String;

    /// Comment marker recording that a column holds values of `type_name`.
    fn type_comment(&self, type_name: &str) -> String {
        format!("{TYPE_COMMENT_PREFIX}{type_name})")
    }

    /// Extracts the logical type name from a column comment produced with
    /// [`type_comment`](Dialect::type_comment), if there is one.
    fn parse_type_comment<'a>(&self, comment: &'a str) -> Option<&'a str> {
        parse_type_comment(comment)
    }
}

/// Default comment marker parser.
///
/// The marker must be the last thing in the comment; anything before it is
/// the user's own comment text.
pub fn parse_type_comment(comment: &str) -> Option<&str> {
    let comment = comment.trim_end().strip_suffix(')')?;
    let start = comment.rfind(TYPE_COMMENT_PREFIX)?;
    let name = &comment[start + TYPE_COMMENT_PREFIX.len()..];

    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        return None;
    }

    Some(name)
}
