/// Type of a raw column [`Value`](super::Value).
///
/// These are the scalar kinds a driver hands back when reading a row or
/// accepts when binding a parameter. Enum adapters only ever produce `I64` or
/// `String`, but they must accept whatever integer width the driver picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// String type
    String,

    /// The null type. Only `Value::Null` has this type.
    Null,
}
