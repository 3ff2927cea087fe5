use crate::{ColumnType, Result};

use enumcol_core::{Dialect, Error};
use indexmap::IndexMap;
use std::sync::Arc;

/// Column types by logical name, in registration order.
///
/// The host creates one while initializing its connection and consults it
/// whenever a mapped field names a custom column type.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    types: IndexMap<String, Arc<dyn ColumnType>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers a column type under its own name.
    pub fn register(&mut self, ty: impl ColumnType + 'static) -> Result<()> {
        self.register_arc(Arc::new(ty))
    }

    pub fn register_arc(&mut self, ty: Arc<dyn ColumnType>) -> Result<()> {
        if self.types.contains_key(ty.name()) {
            return Err(Error::type_already_registered(ty.name()));
        }

        log::debug!(
            "registered column type {} for enum {}",
            ty.name(),
            ty.enum_type()
        );

        self.types.insert(ty.name().to_string(), ty);
        Ok(())
    }

    /// Replaces the column type registered under the same name.
    pub fn override_type(&mut self, ty: impl ColumnType + 'static) -> Result<()> {
        let ty: Arc<dyn ColumnType> = Arc::new(ty);

        let Some(slot) = self.types.get_mut(ty.name()) else {
            return Err(Error::unknown_column_type(ty.name()));
        };

        log::debug!(
            "overriding column type {} with enum {}",
            ty.name(),
            ty.enum_type()
        );

        *slot = ty;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Arc<dyn ColumnType>> {
        self.types
            .get(name)
            .ok_or_else(|| Error::unknown_column_type(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Finds the column type named by the type marker in a column comment.
    ///
    /// Returns `None` when the comment has no marker or names a type that
    /// is not registered.
    pub fn lookup_by_comment(
        &self,
        comment: &str,
        dialect: &dyn Dialect,
    ) -> Option<&Arc<dyn ColumnType>> {
        let name = dialect.parse_type_comment(comment)?;
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ColumnType>> + '_ {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
