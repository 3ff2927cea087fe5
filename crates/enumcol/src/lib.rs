//! Column types that store enumerated values as integers or strings.
//!
//! Declare an enum with [`integer_enum!`] or [`string_enum!`], then register
//! an [`IntegerColumnEnumAdapter`] or [`StringColumnEnumAdapter`] for it with
//! the host's [`Registry`]:
//!
//! ```
//! use enumcol::{integer_enum, IntegerColumnEnumAdapter, Registry};
//!
//! integer_enum! {
//!     pub enum Priority {
//!         Low = 1,
//!         Normal = 2,
//!         High = 3,
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(IntegerColumnEnumAdapter::<Priority>::new()).unwrap();
//!
//! assert!(registry.contains("Priority"));
//! ```

#[macro_use]
mod macros;

#[doc(hidden)]
pub mod __private {
    pub use crate::macros::{distinct_integers, distinct_strings};
}

pub mod adapter;
pub use adapter::{IntegerColumnEnumAdapter, StringColumnEnumAdapter};

mod column_type;
pub use column_type::ColumnType;

mod comment;
pub use comment::column_comment;

mod enum_type;
pub use enum_type::{EnumTypeId, IntegerEnum, StringEnum};

mod registry;
pub use registry::Registry;

pub use enumcol_core::{driver, schema, stmt, Dialect, Error, Result};

#[cfg(feature = "sql")]
pub use enumcol_sql::{Config, SqlDialect};
