use crate::Result;

use std::any::TypeId;

/// An enum whose members are identified by an integer backing value.
///
/// Usually implemented with [`integer_enum!`](crate::integer_enum).
pub trait IntegerEnum: Sized + Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    /// Name of the enum type, used as the default logical column type name.
    const TYPE_NAME: &'static str;

    /// Every member of the enum, in declaration order.
    const VARIANTS: &'static [Self];

    /// Constructs the member backed by `value`.
    ///
    /// Fails with an invalid enum value error when no member is backed by
    /// `value`.
    fn from_i64(value: i64) -> Result<Self>;

    /// Returns the backing value.
    fn to_i64(&self) -> i64;
}

/// An enum whose members are identified by a string backing value.
///
/// Usually implemented with [`string_enum!`](crate::string_enum).
pub trait StringEnum: Sized + Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    /// Name of the enum type, used as the default logical column type name.
    const TYPE_NAME: &'static str;

    /// Every member of the enum, in declaration order.
    const VARIANTS: &'static [Self];

    /// Constructs the member backed by `value`.
    ///
    /// Backing values are compared exactly, including case.
    fn from_backing_str(value: &str) -> Result<Self>;

    /// Returns the backing value.
    fn as_backing_str(&self) -> &str;
}

/// Identifies the concrete enum type an adapter serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumTypeId {
    /// The enum's declared type name
    pub name: &'static str,

    /// Rust type identity of the enum
    pub type_id: TypeId,
}

impl EnumTypeId {
    pub fn of_integer<E: IntegerEnum>() -> EnumTypeId {
        EnumTypeId {
            name: E::TYPE_NAME,
            type_id: TypeId::of::<E>(),
        }
    }

    pub fn of_string<E: StringEnum>() -> EnumTypeId {
        EnumTypeId {
            name: E::TYPE_NAME,
            type_id: TypeId::of::<E>(),
        }
    }

    pub fn is<E: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }
}

impl core::fmt::Display for EnumTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}
