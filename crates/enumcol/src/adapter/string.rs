use crate::{ColumnType, EnumTypeId, Result, StringEnum};

use enumcol_core::{
    schema::db::ColumnSpec,
    stmt::{self, Value},
    Dialect, Error,
};
use std::{any::Any, marker::PhantomData};

/// Stores values of `E` in a variable-length text column.
pub struct StringColumnEnumAdapter<E> {
    name: Option<String>,
    _p: PhantomData<fn() -> E>,
}

impl<E: StringEnum> StringColumnEnumAdapter<E> {
    pub fn new() -> Self {
        StringColumnEnumAdapter {
            name: None,
            _p: PhantomData,
        }
    }

    /// Registers the column type under `name` instead of the enum's type name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(E::TYPE_NAME)
    }

    pub fn resolve_enum_type(&self) -> EnumTypeId {
        EnumTypeId::of_string::<E>()
    }

    /// Returns the dialect's VARCHAR declaration for `spec`.
    pub fn declare_column_type(&self, spec: &ColumnSpec, dialect: &dyn Dialect) -> String {
        dialect.varchar_type_declaration(spec)
    }

    pub fn to_storage(&self, value: Option<&E>) -> Option<String> {
        value.map(|value| value.as_backing_str().to_string())
    }

    /// Converts a raw column value back to the enum.
    ///
    /// Text is passed to the enum as is. Non-text raw values are a type
    /// conversion error; numbers are never stringified.
    pub fn from_storage(&self, raw: impl Into<Value>, _dialect: &dyn Dialect) -> Result<Option<E>> {
        let raw = raw.into();

        if raw.is_null() {
            return Ok(None);
        }

        let value = String::try_from(raw)?;

        E::from_backing_str(&value)
            .inspect_err(|_| log::trace!("rejected {value:?} for string enum {}", self.name()))
            .map(Some)
    }

    pub fn requires_comment_hint(&self) -> bool {
        true
    }
}

impl<E: StringEnum> ColumnType for StringColumnEnumAdapter<E> {
    fn name(&self) -> &str {
        StringColumnEnumAdapter::name(self)
    }

    fn enum_type(&self) -> EnumTypeId {
        self.resolve_enum_type()
    }

    fn storage_type(&self) -> stmt::Type {
        stmt::Type::String
    }

    fn declare_column_type(&self, spec: &ColumnSpec, dialect: &dyn Dialect) -> String {
        StringColumnEnumAdapter::declare_column_type(self, spec, dialect)
    }

    fn requires_comment_hint(&self) -> bool {
        StringColumnEnumAdapter::requires_comment_hint(self)
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

impl<E: StringEnum> Default for StringColumnEnumAdapter<E> {
    fn default() -> Self {
        StringColumnEnumAdapter::new()
    }
}

impl<E> Clone for StringColumnEnumAdapter<E> {
    fn clone(&self) -> Self {
        StringColumnEnumAdapter {
            name: self.name.clone(),
            _p: PhantomData,
        }
    }
}

impl<E: StringEnum> core::fmt::Debug for StringColumnEnumAdapter<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StringColumnEnumAdapter")
            .field("name", &self.name())
            .field("enum_type", &E::TYPE_NAME)
            .finish()
    }
}
