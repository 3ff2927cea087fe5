use super::ColumnSpec;
use crate::driver;

/// Database-level storage types representing how values are stored in the target database.
///
/// `db::Type` is the **external** type of a column as it appears in a
/// `CREATE TABLE` statement. The adapters never pick a type directly: they
/// ask the dialect, which derives a `db::Type` from the [`ColumnSpec`] hints
/// with [`Type::integer_for`] or [`Type::string_for`] and renders it in its
/// own syntax.
///
/// ```text
/// integer enum  →  Integer              (UnsignedInteger when `unsigned`)
/// string enum   →  VarChar(length)      (Char(length) when `fixed`)
///               →  Text                 (length above the database maximum)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A signed 4-byte integer
    Integer,

    /// An unsigned 4-byte integer
    UnsignedInteger,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Fixed-length text type
    Char(u64),
}

impl Type {
    /// Storage type for an integer-backed enum column.
    pub fn integer_for(spec: &ColumnSpec) -> Type {
        if spec.unsigned {
            Type::UnsignedInteger
        } else {
            Type::Integer
        }
    }

    /// Storage type for a string-backed enum column.
    ///
    /// Without an explicit length the database's default VARCHAR length is
    /// used. A length of zero counts as unset. Lengths the database cannot
    /// hold in a VARCHAR fall back to unconstrained text.
    pub fn string_for(spec: &ColumnSpec, db: &driver::StorageTypes) -> Type {
        let length = spec
            .length
            .filter(|&n| n > 0)
            .unwrap_or(db.default_varchar_length);

        match db.varchar {
            Some(max) if length <= max => {
                if spec.fixed {
                    Type::Char(length)
                } else {
                    Type::VarChar(length)
                }
            }
            _ => Type::Text,
        }
    }
}
