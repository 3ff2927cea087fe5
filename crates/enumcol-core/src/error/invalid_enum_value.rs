use super::Error;
use crate::stmt::Value;

/// Error when a backing value does not name any member of an enum type.
///
/// Raised by the enum's own constructor and propagated unchanged by the
/// column adapters. When surfaced while reading rows it usually means the
/// row was edited by hand or the enum definition changed after the row was
/// written.
#[derive(Debug)]
pub(super) struct InvalidEnumValue {
    enum_type: &'static str,
    value: Value,
}

impl std::error::Error for InvalidEnumValue {}

impl core::fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid value {} for enum {}",
            self.value, self.enum_type
        )
    }
}

impl Error {
    /// Creates an invalid enum value error.
    pub fn invalid_enum_value(enum_type: &'static str, value: impl Into<Value>) -> Error {
        Error::from(super::ErrorKind::InvalidEnumValue(InvalidEnumValue {
            enum_type,
            value: value.into(),
        }))
    }

    /// Returns `true` if this error is an invalid enum value error.
    pub fn is_invalid_enum_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEnumValue(_))
    }
}
