pub mod dialect;
pub use dialect::Dialect;

pub mod driver;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses enumcol's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
