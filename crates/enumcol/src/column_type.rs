use crate::{EnumTypeId, Result};

use enumcol_core::{
    schema::db::ColumnSpec,
    stmt::{self, Value},
    Dialect,
};
use std::any::Any;

/// A column type as seen by the host mapping layer.
///
/// The host keeps registered column types behind `Arc<dyn ColumnType>` and
/// works with application values it cannot name statically, so conversions
/// here are type-erased. The typed operations live on the adapters
/// themselves.
pub trait ColumnType: core::fmt::Debug + Send + Sync {
    /// Logical type name the column type is registered under.
    fn name(&self) -> &str;

    /// The enum type the column holds.
    fn enum_type(&self) -> EnumTypeId;

    /// Kind of raw value bound for this column.
    fn storage_type(&self) -> stmt::Type;

    /// DDL fragment declaring the column's storage type.
    fn declare_column_type(&self, spec: &ColumnSpec, dialect: &dyn Dialect) -> String;

    /// Whether generated column comments must record the logical type name.
    fn requires_comment_hint(&self) -> bool;

    /// Converts an application value to the raw value bound to a statement.
    ///
    /// Accepts the enum itself or an `Option` of it. Any other type fails
    /// with an enum type mismatch error.
    fn convert_to_database_value(&self, value: &dyn Any) -> Result<Value>;

    /// Converts a raw column value to the enum, boxed. `NULL` gives `None`.
    fn convert_to_app_value(
        &self,
        raw: Value,
        dialect: &dyn Dialect,
    ) -> Result<Option<Box<dyn Any + Send>>>;
}
