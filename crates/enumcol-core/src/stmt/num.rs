use super::Value;
use crate::Error;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Any integer variant converts when it fits the target width. A
            // string converts only when the whole string parses as the target
            // type; some drivers return integer columns as text.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::I8(v) => (*v).try_into().ok(),
                        Value::I16(v) => (*v).try_into().ok(),
                        Value::I32(v) => (*v).try_into().ok(),
                        Value::I64(v) => (*v).try_into().ok(),
                        Value::U8(v) => (*v).try_into().ok(),
                        Value::U16(v) => (*v).try_into().ok(),
                        Value::U32(v) => (*v).try_into().ok(),
                        Value::U64(v) => (*v).try_into().ok(),
                        Value::String(v) => v.parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64)
}
