use super::Error;

#[derive(Debug)]
pub(super) struct UnknownColumnType {
    name: Box<str>,
}

impl std::error::Error for UnknownColumnType {}

impl core::fmt::Display for UnknownColumnType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column type `{}`", self.name)
    }
}

impl Error {
    /// Creates an error for a lookup of a column type that was never registered.
    pub fn unknown_column_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumnType(UnknownColumnType {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_column_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumnType(_))
    }
}
