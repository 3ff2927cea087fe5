use super::Error;

/// Error when a type-erased conversion receives a value of a different type
/// than the enum the column was registered for.
#[derive(Debug)]
pub(super) struct EnumTypeMismatch {
    expected: Box<str>,
}

impl std::error::Error for EnumTypeMismatch {}

impl core::fmt::Display for EnumTypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "value is not of enum type {}", self.expected)
    }
}

impl Error {
    pub fn enum_type_mismatch(expected: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EnumTypeMismatch(EnumTypeMismatch {
            expected: expected.into().into(),
        }))
    }

    pub fn is_enum_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EnumTypeMismatch(_))
    }
}
