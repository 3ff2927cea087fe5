use super::Flavor;

use enumcol_core::schema::db;

impl Flavor {
    /// Renders a storage type in this flavor's DDL syntax.
    pub(super) fn render_type(self, ty: &db::Type) -> String {
        match (self, ty) {
            (Flavor::Sqlite, db::Type::Integer) => "INTEGER".to_string(),
            (Flavor::Sqlite, db::Type::UnsignedInteger) => "INTEGER UNSIGNED".to_string(),
            // PostgreSQL has no unsigned integers.
            (Flavor::Postgresql, db::Type::Integer | db::Type::UnsignedInteger) => {
                "INT".to_string()
            }
            (Flavor::Mysql, db::Type::Integer) => "INT".to_string(),
            (Flavor::Mysql, db::Type::UnsignedInteger) => "INT UNSIGNED".to_string(),
            (Flavor::Sqlite, db::Type::Text) => "CLOB".to_string(),
            (Flavor::Postgresql, db::Type::Text) => "TEXT".to_string(),
            (Flavor::Mysql, db::Type::Text) => "LONGTEXT".to_string(),
            (_, db::Type::VarChar(n)) => format!("VARCHAR({n})"),
            (_, db::Type::Char(n)) => format!("CHAR({n})"),
        }
    }
}
