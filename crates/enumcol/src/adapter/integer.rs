use crate::{ColumnType, EnumTypeId, IntegerEnum, Result};

use enumcol_core::{
    schema::db::ColumnSpec,
    stmt::{self, Value},
    Dialect, Error,
};
use std::{any::Any, marker::PhantomData};

/// Stores values of `E` in an integer column.
pub struct IntegerColumnEnumAdapter<E> {
    /// Logical type name override. Defaults to `E::TYPE_NAME`.
    name: Option<String>,
    _p: PhantomData<fn() -> E>,
}

impl<E: IntegerEnum> IntegerColumnEnumAdapter<E> {
    pub fn new() -> Self {
        IntegerColumnEnumAdapter {
            name: None,
            _p: PhantomData,
        }
    }

    /// Registers the column type under `name` instead of the enum's type name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The logical type name the host registers this adapter under.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(E::TYPE_NAME)
    }

    /// The enum type this adapter serializes.
    pub fn resolve_enum_type(&self) -> EnumTypeId {
        EnumTypeId::of_integer::<E>()
    }

    /// Returns the dialect's native integer declaration for `spec`.
    pub fn declare_column_type(&self, spec: &ColumnSpec, dialect: &dyn Dialect) -> String {
        dialect.integer_type_declaration(spec)
    }

    /// Converts an enum value to the integer bound to the statement.
    pub fn to_storage(&self, value: Option<&E>) -> Option<i64> {
        value.map(E::to_i64)
    }

    /// Converts a raw column value back to the enum.
    ///
    /// `NULL` loads as `None`. Any integer width is accepted, as is a string
    /// holding a base-10 integer; other raw values fail with a type
    /// conversion error. An integer that backs no member of `E` fails with
    /// the enum's invalid value error, unchanged.
    pub fn from_storage(&self, raw: impl Into<Value>, _dialect: &dyn Dialect) -> Result<Option<E>> {
        let raw = raw.into();

        if raw.is_null() {
            return Ok(None);
        }

        let value = i64::try_from(raw)?;

        E::from_i64(value)
            .inspect_err(|_| log::trace!("rejected {value} for integer enum {}", self.name()))
            .map(Some)
    }

    /// Always `true`: an integer column alone does not say which enum it holds.
    pub fn requires_comment_hint(&self) -> bool {
        true
    }
}

impl<E: IntegerEnum> ColumnType for IntegerColumnEnumAdapter<E> {
    fn name(&self) -> &str {
        IntegerColumnEnumAdapter::name(self)
    }

    fn enum_type(&self) -> EnumTypeId {
        self.resolve_enum_type()
    }

    fn storage_type(&self) -> stmt::Type {
        stmt::Type::I64
    }

    fn declare_column_type(&self, spec: &ColumnSpec, dialect: &dyn Dialect) -> String {
        IntegerColumnEnumAdapter::declare_column_type(self, spec, dialect)
    }

    fn requires_comment_hint(&self) -> bool {
        IntegerColumnEnumAdapter::requires_comment_hint(self)
    }

    fn convert_to_database_value(&self, value: &dyn Any) -> Result<Value> {
        if let Some(value) = value.downcast_ref::<E>() {
            Ok(Value::from(self.to_storage(Some(value))))
        } else if let Some(value) = value.downcast_ref::<Option<E>>() {
            Ok(Value::from(self.to_storage(value.as_ref())))
        } else {
            Err(Error::enum_type_mismatch(E::TYPE_NAME))
        }
    }

    fn convert_to_app_value(
        &self,
        raw: Value,
        dialect: &dyn Dialect,
    ) -> Result<Option<Box<dyn Any + Send>>> {
        Ok(self
            .from_storage(raw, dialect)?
            .map(|value| Box::new(value) as Box<dyn Any + Send>))
    }
}

impl<E: IntegerEnum> Default for IntegerColumnEnumAdapter<E> {
    fn default() -> Self {
        IntegerColumnEnumAdapter::new()
    }
}

impl<E> Clone for IntegerColumnEnumAdapter<E> {
    fn clone(&self) -> Self {
        IntegerColumnEnumAdapter {
            name: self.name.clone(),
            _p: PhantomData,
        }
    }
}

impl<E: IntegerEnum> core::fmt::Debug for IntegerColumnEnumAdapter<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntegerColumnEnumAdapter")
            .field("name", &self.name())
            .field("enum_type", &E::TYPE_NAME)
            .finish()
    }
}
