use super::Error;

#[derive(Debug)]
pub(super) struct TypeAlreadyRegistered {
    name: Box<str>,
}

impl std::error::Error for TypeAlreadyRegistered {}

impl core::fmt::Display for TypeAlreadyRegistered {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column type `{}` is already registered", self.name)
    }
}

impl Error {
    pub fn type_already_registered(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeAlreadyRegistered(
            TypeAlreadyRegistered {
                name: name.into().into(),
            },
        ))
    }

    pub fn is_type_already_registered(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeAlreadyRegistered(_))
    }
}
