/// Declares an enum backed by integer values and implements
/// [`IntegerEnum`](crate::IntegerEnum) for it.
///
/// ```
/// enumcol::integer_enum! {
///     /// Lifecycle of an order.
///     pub enum OrderStatus {
///         Pending = 1,
///         Shipped = 2,
///         Cancelled = -1,
///     }
/// }
///
/// use enumcol::IntegerEnum;
///
/// assert_eq!(OrderStatus::Shipped.to_i64(), 2);
/// assert_eq!(OrderStatus::from_i64(-1).unwrap(), OrderStatus::Cancelled);
/// assert!(OrderStatus::from_i64(3).is_err());
/// ```
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`
/// and `Hash`, and displays as its variant name. Backing values must be
/// distinct; a repeated value fails to compile.
#[macro_export]
macro_rules! integer_enum {
    (
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $(
                $( #[$variant_meta:meta] )*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $( #[$meta] )*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $( #[$variant_meta] )*
                $variant,
            )+
        }

        const _: () = assert!(
            $crate::__private::distinct_integers(&[ $( $value ),+ ]),
            concat!("duplicate backing value in integer enum ", stringify!($name)),
        );

        impl $crate::IntegerEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn from_i64(value: i64) -> $crate::Result<Self> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err($crate::Error::invalid_enum_value(
                        <Self as $crate::IntegerEnum>::TYPE_NAME,
                        value,
                    )),
                }
            }

            fn to_i64(&self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::Error;

            fn try_from(value: i64) -> $crate::Result<Self> {
                <Self as $crate::IntegerEnum>::from_i64(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                <$name as $crate::IntegerEnum>::to_i64(&value)
            }
        }

        impl From<$name> for $crate::stmt::Value {
            fn from(value: $name) -> $crate::stmt::Value {
                $crate::stmt::Value::I64(<$name as $crate::IntegerEnum>::to_i64(&value))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

/// Declares an enum backed by string values and implements
/// [`StringEnum`](crate::StringEnum) for it.
///
/// ```
/// enumcol::string_enum! {
///     pub enum AccountState {
///         Active = "ACTIVE",
///         Suspended = "SUSPENDED",
///     }
/// }
///
/// use enumcol::StringEnum;
///
/// assert_eq!(AccountState::Active.as_backing_str(), "ACTIVE");
/// assert_eq!("SUSPENDED".parse::<AccountState>().unwrap(), AccountState::Suspended);
/// assert!(AccountState::from_backing_str("active").is_err());
/// ```
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`
/// and `Hash`, and displays as its backing value. Backing values must be
/// distinct; a repeated value fails to compile.
#[macro_export]
macro_rules! string_enum {
    (
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $(
                $( #[$variant_meta:meta] )*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $( #[$meta] )*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $( #[$variant_meta] )*
                $variant,
            )+
        }

        const _: () = assert!(
            $crate::__private::distinct_strings(&[ $( $value ),+ ]),
            concat!("duplicate backing value in string enum ", stringify!($name)),
        );

        impl $crate::StringEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn from_backing_str(value: &str) -> $crate::Result<Self> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err($crate::Error::invalid_enum_value(
                        <Self as $crate::StringEnum>::TYPE_NAME,
                        value,
                    )),
                }
            }

            fn as_backing_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(value: &str) -> $crate::Result<Self> {
                <Self as $crate::StringEnum>::from_backing_str(value)
            }
        }

        impl From<$name> for $crate::stmt::Value {
            fn from(value: $name) -> $crate::stmt::Value {
                $crate::stmt::Value::from(<$name as $crate::StringEnum>::as_backing_str(&value))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::StringEnum>::as_backing_str(self))
            }
        }
    };
}

/// Returns `true` when no integer appears twice in `values`.
pub const fn distinct_integers(values: &[i64]) -> bool {
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() {
            if values[i] == values[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns `true` when no string appears twice in `values`.
pub const fn distinct_strings(values: &[&str]) -> bool {
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() {
            if str_eq(values[i], values[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_distinct() {
        assert!(distinct_integers(&[1, 2, 3]));
        assert!(distinct_integers(&[-1, 0, 1]));
        assert!(!distinct_integers(&[1, 2, 1]));
    }

    #[test]
    fn strings_distinct() {
        assert!(distinct_strings(&["A", "B", "AB"]));
        assert!(!distinct_strings(&["ACTIVE", "CLOSED", "ACTIVE"]));
        assert!(!distinct_strings(&["", ""]));
    }

    // Evaluated at compile time like the generated check.
    const _: () = assert!(distinct_integers(&[10, 20, 30]));
    const _: () = assert!(!distinct_strings(&["X", "X"]));
}
