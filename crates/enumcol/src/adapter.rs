//! Adapters converting enum values to and from column values.
//!
//! Each adapter is parameterized by the enum type it serializes. The two
//! adapters are independent; they differ only in the column kind.

mod integer;
pub use integer::IntegerColumnEnumAdapter;

mod string;
pub use string::StringColumnEnumAdapter;
